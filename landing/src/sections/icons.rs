//! Inline SVG icons from [Lucide](https://lucide.dev/) (24px grid, stroked).

use leptos::prelude::*;

/// Icons used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    BookOpen,
    ChevronRight,
    GraduationCap,
    Mail,
    Menu,
    Phone,
    Quote,
    School,
    Shield,
    User,
    X,
}

impl IconKind {
    /// SVG path data; each entry becomes one `<path d=...>`.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
            IconKind::GraduationCap => &[
                "M22 10v6M2 10l10-5 10 5-10 5z",
                "M6 12v5c3 3 9 3 12 0v-5",
            ],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            IconKind::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z",
                "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
            ],
            IconKind::School => &[
                "M14 22v-4a2 2 0 1 0-4 0v4",
                "m18 10 4 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-8l4-2",
                "M18 5v17",
                "m4 6 8-4 8 4",
                "M6 5v17",
                "M12 7a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
            ],
            IconKind::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            IconKind::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            ],
            IconKind::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

/// Renders an icon as inline SVG, hidden from assistive tech.
#[component]
pub fn Icon(
    kind: IconKind,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {kind.paths().iter().map(|&d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}
