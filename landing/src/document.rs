//! Root document component - the complete HTML page for static export.

use leptos::prelude::*;

use crate::App;
use crate::config::SiteConfig;
use crate::content::CONTENT;

/// `<html>` shell around [`App`]: metadata, web font link, then the page.
#[component]
pub fn LandingDocument(config: SiteConfig) -> impl IntoView {
    let brand = CONTENT.brand;
    let title = format!("{} | {}", brand.name, brand.tagline);
    let font_href = config.font_stylesheet_url.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=brand.tagline />
                <title>{title}</title>
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=font_href />
            </head>
            <body>
                <App config=config />
            </body>
        </html>
    }
}
