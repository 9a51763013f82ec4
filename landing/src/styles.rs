//! CSS for the landing page.
//!
//! Colors come from the `--brand-*` custom properties that the page root
//! sets from [`crate::content::BrandConfig::css_vars`]. The stylesheet is
//! emitted as the text of a `<style>` element, so it must not contain
//! `<`, `>` or `&` (they would be HTML-escaped).

/// Complete page stylesheet.
pub const LANDING_CSS: &str = r#"
:root {
    color-scheme: light;
    --font-serif: 'Cormorant Garamond', ui-serif, Georgia, Cambria, "Times New Roman", Times, serif;
    --font-sans: 'Inter', ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, "Noto Sans", Ubuntu, Cantarell, "Helvetica Neue", Arial, sans-serif;
    --border-subtle: rgba(0, 0, 0, 0.1);
    --text-body: #374151;
    --text-muted: #4b5563;
    --text-strong: #111827;
    --container-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
}

.page {
    min-height: 100vh;
    font-family: var(--font-sans);
    background: var(--brand-paper);
    color: var(--brand-ink);
}

.font-serif {
    font-family: var(--font-serif);
}

a {
    color: inherit;
    text-decoration: none;
}

.underline {
    text-decoration: underline;
}

.container {
    margin: 0 auto;
    max-width: var(--container-max);
    padding: 0 1rem;
    position: relative;
}

@media (min-width: 640px) {
    .container { padding: 0 1.5rem; }
}

@media (min-width: 1024px) {
    .container { padding: 0 2rem; }
}

/* Icons */

.icon { width: 1.5rem; height: 1.5rem; flex-shrink: 0; }
.icon-sm { width: 1rem; height: 1rem; }
.icon-quote { width: 1.25rem; height: 1.25rem; margin-top: 0.25rem; }

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border-radius: 9999px;
    padding: 0.75rem 1.25rem;
    font-size: 0.875rem;
    font-weight: 600;
    border: 0;
    cursor: pointer;
    transition: box-shadow 0.15s ease, background-color 0.15s ease;
}

.btn-sm { padding: 0.5rem 1rem; }

.btn-primary {
    background-color: var(--brand-primary);
    color: #fff;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
}

.btn-primary:hover { box-shadow: 0 6px 16px rgba(0, 0, 0, 0.15); }

.btn-secondary {
    background: #fff;
    color: var(--text-strong);
    border: 1px solid var(--border-subtle);
}

.btn-secondary:hover { background: rgba(0, 0, 0, 0.05); }

/* Nav */

.nav {
    position: sticky;
    top: 0;
    z-index: 40;
    backdrop-filter: blur(8px);
    background-color: rgba(250, 247, 241, 0.7);
    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
}

.nav-inner {
    display: flex;
    height: 12rem;
    align-items: center;
    justify-content: space-between;
}

.nav-brand { display: flex; align-items: center; gap: 0.75rem; }

.nav-logo {
    width: 6rem;
    height: 6rem;
    border-radius: 9999px;
    object-fit: cover;
}

.nav-title { font-size: 1.875rem; color: var(--text-strong); }

.nav-links { display: none; align-items: center; gap: 2rem; }

.nav-link { font-size: 0.875rem; font-weight: 500; color: var(--text-body); }
.nav-link:hover { color: var(--text-strong); }

.nav-menu-btn {
    padding: 0.5rem;
    background: none;
    border: 0;
    cursor: pointer;
    color: inherit;
}

.nav-mobile {
    border-top: 1px solid rgba(0, 0, 0, 0.05);
    background-color: var(--brand-paper);
}

.nav-mobile-inner { padding-top: 1rem; padding-bottom: 1rem; }

.nav-mobile-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    font-size: 1.125rem;
}

.nav-mobile-links { margin-top: 1rem; display: grid; gap: 0.75rem; }

.nav-mobile-link { border-radius: 0.5rem; padding: 0.5rem 0.75rem; color: #1f2937; }
.nav-mobile-link:hover { background: rgba(0, 0, 0, 0.05); }

.nav-mobile-cta { margin-top: 0.5rem; }

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-menu-btn, .nav-mobile { display: none; }
}

/* Sections */

.section { position: relative; padding: 5rem 0; }
.section-paper { background-color: var(--brand-paper); }
.section-fade { background: linear-gradient(180deg, var(--brand-paper), #ffffff); }

.ornament {
    pointer-events: none;
    position: absolute;
    inset: 0;
    background-image:
        radial-gradient(circle at 20% 10%, rgba(194, 160, 90, 0.07), transparent 35%),
        radial-gradient(circle at 80% 0%, rgba(14, 79, 61, 0.08), transparent 35%);
    mask-image: radial-gradient(60% 50% at 50% 0%, black, transparent);
}

.section-header { margin: 0 auto; max-width: 42rem; text-align: center; }

.section-eyebrow {
    font-size: 0.875rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--brand-primary);
    margin: 0;
}

.section-title {
    margin: 0.5rem 0 0;
    font-size: 2.25rem;
    font-weight: 500;
    color: var(--text-strong);
}

.section-sub { margin-top: 0.75rem; color: var(--text-muted); }

.grid { display: grid; gap: 1.5rem; margin: 2.5rem auto 0; }
.about-grid, .admissions-grid, .contact-grid { max-width: 64rem; }
.programs-grid, .faculty-grid { max-width: 72rem; }

@media (min-width: 640px) {
    .grid-2, .grid-3 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
    .grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

.card {
    border-radius: 1rem;
    border: 1px solid var(--border-subtle);
    background: #fff;
    padding: 1.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.card-title { margin: 0; font-size: 1.25rem; font-weight: 500; color: var(--text-strong); }
.card-body { margin-top: 0.5rem; color: var(--text-body); }

/* Hero */

.hero { position: relative; overflow: hidden; }
.hero-grid { display: grid; gap: 2.5rem; padding-top: 2.5rem; padding-bottom: 2.5rem; }

@media (min-width: 1024px) {
    .hero-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); align-items: center; }
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 9999px;
    border: 1px solid var(--border-subtle);
    background: #fff;
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
    color: var(--text-body);
}

.hero-title {
    margin: 1rem 0 0;
    font-size: 3rem;
    font-weight: 500;
    line-height: 1.15;
    color: var(--text-strong);
}

.hero-description { margin-top: 1rem; font-size: 1.125rem; color: var(--text-body); max-width: 36rem; }
.hero-actions { margin-top: 1.5rem; display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; }

.hero-verse {
    margin-top: 2rem;
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 1rem;
    border-left: 3px solid var(--brand-accent);
}
.hero-verse-ar { margin: 0; font-size: 1.125rem; color: var(--text-strong); }
.hero-verse-en { margin: 0.25rem 0 0; font-size: 0.875rem; color: var(--text-muted); }

/* Programs */

.program-icon {
    display: inline-flex;
    width: 2.5rem;
    height: 2.5rem;
    align-items: center;
    justify-content: center;
    border-radius: 0.5rem;
    background-color: rgba(14, 79, 61, 0.08);
    color: var(--brand-primary);
}

.program-card .card-title { margin-top: 1rem; }

.program-highlights {
    margin-top: 0.75rem;
    padding-left: 1.25rem;
    font-size: 0.875rem;
    color: var(--text-muted);
    list-style: disc;
}

/* Faculty */

.faculty-avatar {
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    background: linear-gradient(135deg, var(--brand-primary), var(--brand-primary-dark));
}

.faculty-name { margin: 1rem 0 0; font-size: 1.125rem; color: var(--text-strong); }
.faculty-role { margin: 0; font-size: 0.875rem; font-weight: 500; color: var(--brand-primary); }

/* Admissions */

.key-dates { margin: 0.75rem 0 1rem; padding: 0; list-style: none; color: var(--text-body); }
.key-dates li + li { margin-top: 0.5rem; }

/* FAQ */

.faq-list { margin: 2.5rem auto 0; max-width: 48rem; padding: 0; }
.faq-item + .faq-item { border-top: 1px solid var(--border-subtle); }

.faq-question {
    display: flex;
    width: 100%;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1.5rem;
    background: none;
    border: 0;
    cursor: pointer;
    text-align: left;
    font: inherit;
}

.faq-question-text { font-weight: 500; color: var(--text-strong); }
.faq-indicator { font-size: 0.875rem; color: var(--text-muted); }
.faq-answer { padding: 0 1.5rem 1.25rem; color: var(--text-body); }

/* Contact */

.form-fields { display: grid; gap: 1rem; }
.form-label { display: block; font-size: 0.875rem; font-weight: 500; color: var(--text-body); }

.form-input {
    margin-top: 0.25rem;
    width: 100%;
    border-radius: 0.5rem;
    border: 1px solid var(--border-subtle);
    padding: 0.5rem 0.75rem;
    font: inherit;
    outline: none;
    box-shadow: inset 0 1px 0 rgba(0, 0, 0, 0.02);
    accent-color: var(--brand-primary);
}

.form-input:focus { box-shadow: 0 0 0 2px var(--brand-primary); }

.contact-direct { margin-top: 1rem; font-size: 0.875rem; color: var(--text-muted); }
.contact-phone { margin-top: 0.5rem; display: flex; align-items: center; gap: 0.5rem; color: var(--text-body); }

/* Footer */

.footer { position: relative; border-top: 1px solid rgba(0, 0, 0, 0.05); padding: 2.5rem 0; }

.footer-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
}

@media (min-width: 640px) {
    .footer-inner { flex-direction: row; }
}

.footer-copyright { margin: 0; font-size: 0.875rem; color: var(--text-muted); }
.footer-links { display: flex; align-items: center; gap: 1rem; font-size: 0.875rem; color: var(--text-muted); }
.footer-link:hover { color: var(--text-strong); }
"#;
