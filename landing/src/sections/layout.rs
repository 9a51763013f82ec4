//! Shared layout pieces: width container, section heading, background ornament.

use leptos::prelude::*;

/// Centered max-width wrapper.
#[component]
pub fn Container(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    let class = if class.is_empty() {
        "container".to_string()
    } else {
        format!("container {class}")
    };
    view! { <div class=class>{children()}</div> }
}

/// Eyebrow + title + optional subtitle, centered above a section body.
#[component]
pub fn SectionTitle(
    #[prop(optional)] eyebrow: Option<&'static str>,
    title: &'static str,
    #[prop(optional)] sub: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            {eyebrow.map(|e| view! { <p class="section-eyebrow">{e}</p> })}
            <h2 class="section-title font-serif">{title}</h2>
            {sub.map(|s| view! { <p class="section-sub">{s}</p> })}
        </div>
    }
}

/// Soft radial-gradient wash behind a section.
#[component]
pub fn Ornament() -> impl IntoView {
    view! { <div class="ornament" aria-hidden="true"></div> }
}
