use leptos::prelude::*;

use super::Container;
use crate::content::{BrandConfig, NavItem};

#[component]
pub fn Footer(brand: &'static BrandConfig, links: &'static [NavItem], year: i32) -> impl IntoView {
    let copyright = format!("© {year} {}. All rights reserved.", brand.name);

    view! {
        <footer class="footer section-paper">
            <Container class="footer-inner">
                <p class="footer-copyright">{copyright}</p>
                <div class="footer-links">
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="footer-link" data-key=link.href>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Container>
        </footer>
    }
}
