use leptos::prelude::*;

use super::{Container, Icon, IconKind};
use crate::content::{APPLY_CTA, BrandConfig, NavItem};
use crate::dom::scroll_to_fragment;
use crate::state::NavDisclosure;

/// Sticky header with desktop links and a mobile drawer.
///
/// The drawer's open flag is owned here; every mobile link closes it
/// before scrolling to its target.
#[component]
pub fn Nav(
    brand: &'static BrandConfig,
    items: &'static [NavItem],
    #[prop(into)]
    logo_url: String,
    /// Starting drawer state (closed unless a caller says otherwise)
    #[prop(optional)]
    initial: NavDisclosure,
) -> impl IntoView {
    let menu = RwSignal::new(initial);
    let logo_alt = format!("{} logo", brand.name);

    // Link selection couples the drawer to navigation: close, then scroll.
    let select_link = move |item: &'static NavItem| {
        move |ev: leptos::ev::MouseEvent| {
            if let Some(target) = menu.try_update(|m| m.select_link(item)) {
                scroll_to_fragment(&ev, target);
            }
        }
    };

    view! {
        <header class="nav">
            <Container class="nav-inner">
                <a href="#top" class="nav-brand">
                    <img src=logo_url alt=logo_alt class="nav-logo" />
                    <span class="nav-title font-serif">{brand.name}</span>
                </a>
                <nav class="nav-links">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=item.href class="nav-link" data-key=item.href>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <a href=APPLY_CTA.href class="btn btn-primary btn-sm">
                        {APPLY_CTA.label}
                        <Icon kind=IconKind::ChevronRight class="icon icon-sm" />
                    </a>
                </nav>
                <button
                    type="button"
                    class="nav-menu-btn"
                    aria-label="Open menu"
                    aria-controls="mobile-menu"
                    aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
                    on:click=move |_| menu.update(NavDisclosure::open_menu)
                >
                    <Icon kind=IconKind::Menu />
                </button>
            </Container>

            <Show when=move || menu.get().is_open()>
                <div id="mobile-menu" class="nav-mobile">
                    <Container class="nav-mobile-inner">
                        <div class="nav-mobile-header">
                            <span class="font-serif">{brand.name}</span>
                            <button
                                type="button"
                                class="nav-menu-btn"
                                aria-label="Close menu"
                                on:click=move |_| menu.update(NavDisclosure::close_menu)
                            >
                                <Icon kind=IconKind::X />
                            </button>
                        </div>
                        <div class="nav-mobile-links">
                            {items
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.href
                                            class="nav-mobile-link"
                                            data-key=item.href
                                            on:click={select_link(item)}
                                        >
                                            {item.label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            <a
                                href=APPLY_CTA.href
                                class="btn btn-primary btn-sm nav-mobile-cta"
                                on:click={select_link(&APPLY_CTA)}
                            >
                                {APPLY_CTA.label}
                                <Icon kind=IconKind::ChevronRight class="icon icon-sm" />
                            </a>
                        </div>
                    </Container>
                </div>
            </Show>
        </header>
    }
}
