use leptos::prelude::*;

use super::{Container, Icon, IconKind, Ornament};
use crate::content::{APPLY_CTA, BrandConfig};

#[component]
pub fn Hero(brand: &'static BrandConfig) -> impl IntoView {
    let description = format!(
        "{}. We cultivate knowledge with adab, discipline, and community – preparing students \
         to live Islam with clarity and excellence.",
        brand.tagline
    );

    view! {
        <section id="top" class="hero section-paper">
            <Ornament />
            <Container class="hero-grid">
                <div class="hero-content">
                    <p class="hero-badge">
                        <Icon kind=IconKind::Shield class="icon icon-sm" />
                        "Arabic and Quranic Mastery"
                    </p>
                    <h1 class="hero-title font-serif">{brand.name}</h1>
                    <p class="hero-description">{description}</p>
                    <div class="hero-actions">
                        <a href=APPLY_CTA.href class="btn btn-primary">
                            {APPLY_CTA.label}
                            <Icon kind=IconKind::ChevronRight class="icon icon-sm" />
                        </a>
                        <a href="#about" class="btn btn-secondary">"Learn More"</a>
                    </div>
                    <Verse brand=brand />
                </div>
            </Container>
        </section>
    }
}

#[component]
fn Verse(brand: &'static BrandConfig) -> impl IntoView {
    view! {
        <div class="card hero-verse">
            <Icon kind=IconKind::Quote class="icon icon-quote" />
            <div>
                <p class="hero-verse-ar font-serif" lang="ar" dir="rtl">{brand.hero_verse_ar}</p>
                <p class="hero-verse-en">{brand.hero_verse_en}</p>
            </div>
        </div>
    }
}
