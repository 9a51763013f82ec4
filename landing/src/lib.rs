//! # afsah-landing
//!
//! Landing page for Afsah Institute, built from Leptos components.
//!
//! The same component tree ships two ways:
//!
//! - **`ssr`** (default) - [`render_landing`] renders a complete static
//!   HTML document; the `afsah-export` binary writes it to disk.
//! - **`csr`** - [`mount`] mounts [`App`] into `<body>` for a trunk build,
//!   where the mobile menu and FAQ accordion become interactive.
//!
//! ## Quick Start
//!
//! ```rust
//! use afsah_landing::{config::SiteConfig, render_landing};
//!
//! let html = render_landing(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Afsah Institute"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - static content tables and their invariants
//! - [`state`] - the two disclosure state machines (mobile menu, FAQ)
//! - [`sections`] - one Leptos component per page section
//! - [`styles`] - the page stylesheet
//! - [`config`] - asset URLs and export settings

pub mod config;
pub mod content;
mod dom;
pub mod error;
pub mod sections;
pub mod state;
pub mod styles;

#[cfg(feature = "ssr")]
mod document;

use leptos::prelude::*;

use config::SiteConfig;
use content::{ABOUT_CARDS, CONTENT, FOOTER_LINKS, KEY_DATES};
use sections::{About, Admissions, Contact, Faculty, Faq, Footer, Hero, Nav, Programs};
use styles::LANDING_CSS;

#[cfg(feature = "ssr")]
pub use document::LandingDocument;

/// The whole page: nav, sections in order, footer.
#[component]
pub fn App(#[prop(optional)] config: SiteConfig) -> impl IntoView {
    let brand = CONTENT.brand;
    let year = config.year();

    view! {
        <style>{LANDING_CSS}</style>
        <div class="page" style=brand.css_vars()>
            <Nav brand=brand items=CONTENT.nav logo_url=config.logo_url />
            <main>
                <Hero brand=brand />
                <About cards=ABOUT_CARDS />
                <Programs programs=CONTENT.programs />
                <Faculty members=CONTENT.faculty />
                <Admissions dates=KEY_DATES />
                <Faq faqs=CONTENT.faqs />
                <Contact brand=brand />
            </main>
            <Footer brand=brand links=FOOTER_LINKS year=year />
        </div>
    }
}

/// Render the complete landing page as an HTML document string.
///
/// Every stateful component renders its initial state: mobile menu
/// closed, first FAQ entry expanded.
#[cfg(feature = "ssr")]
pub fn render_landing(config: &SiteConfig) -> String {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| {
        let config = config.clone();
        view! { <LandingDocument config=config /> }.to_html()
    });
    tracing::debug!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Validate the content, render the page and write it to `config.out`,
/// creating parent directories. Returns the number of bytes written.
#[cfg(feature = "ssr")]
pub fn export_landing(config: &SiteConfig) -> Result<usize, error::ExportError> {
    use error::ExportError;

    content::validate_content(&CONTENT)?;
    let html = render_landing(config);

    let write = || -> std::io::Result<()> {
        if let Some(parent) = config.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config.out, &html)
    };
    write().map_err(|source| ExportError::Write {
        path: config.out.clone(),
        source,
    })?;

    tracing::info!(path = %config.out.display(), bytes = html.len(), "landing page written");
    Ok(html.len())
}

/// Mount the interactive page into `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
