//! Browser-side effects for in-page navigation.

use leptos::ev::MouseEvent;

/// Smoothly scroll the element with id `target` into view.
///
/// Suppresses the anchor's default jump only when the element exists, so
/// a stale fragment still falls back to ordinary link behavior.
#[cfg(feature = "csr")]
pub fn scroll_to_fragment(ev: &MouseEvent, target: &str) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(target))
    else {
        tracing::debug!(fragment = target, "no element for fragment, using default navigation");
        return;
    };

    ev.prevent_default();
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Server-rendered markup has no viewport; the anchor href does the work.
#[cfg(not(feature = "csr"))]
pub fn scroll_to_fragment(_ev: &MouseEvent, _target: &str) {}
