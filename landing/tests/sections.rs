//! Server-rendered markup of each section, checked against its content
//! tables and the state it was rendered with.

#![cfg(feature = "ssr")]

use afsah_landing::content::{
    ABOUT_CARDS, BRAND, FACULTY, FAQS, FOOTER_LINKS, FacultyMember, FaqEntry, NAV_ITEMS, PROGRAMS,
    ProgramEntry,
};
use afsah_landing::sections::{About, CONTACT_FIELDS, Contact, Faculty, Faq, Footer, Nav, Programs};
use afsah_landing::state::{FaqAccordion, NavDisclosure};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

fn render<V: RenderHtml>(build: impl FnOnce() -> V) -> String {
    Owner::new().with(|| build().to_html())
}

/// Values of every `data-key` attribute, in document order.
fn data_keys(html: &str) -> Vec<&str> {
    html.split("data-key=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

fn render_faq(accordion: FaqAccordion) -> String {
    render(|| view! { <Faq faqs=FAQS initial=accordion /> })
}

fn render_nav(disclosure: NavDisclosure) -> String {
    render(|| {
        view! {
            <Nav brand={&BRAND} items=NAV_ITEMS logo_url="/logo.png" initial=disclosure />
        }
    })
}

// ---------------------------------------------------------------------------
// FAQ accordion
// ---------------------------------------------------------------------------

#[test]
fn faq_initially_expands_first_entry() {
    let html = render(|| view! { <Faq faqs=FAQS /> });

    assert_eq!(html.matches("data-faq-state=\"open\"").count(), 1);
    assert_eq!(html.matches("data-faq-state=\"closed\"").count(), 2);
    assert!(html.contains(FAQS[0].answer));
    assert!(!html.contains(FAQS[1].answer));
    assert!(!html.contains(FAQS[2].answer));
    assert_eq!(html.matches('−').count(), 1);
    assert_eq!(html.matches('+').count(), 2);
}

#[test]
fn faq_renders_only_the_selected_entry_expanded() {
    for selected in 0..FAQS.len() {
        let html = render_faq(FaqAccordion::with_selected(Some(selected)));

        assert_eq!(html.matches("data-faq-state=\"open\"").count(), 1);
        for (i, entry) in FAQS.iter().enumerate() {
            assert_eq!(html.contains(entry.answer), i == selected, "entry {i}");
        }
    }
}

#[test]
fn faq_toggle_moves_expansion() {
    let mut accordion = FaqAccordion::new();
    accordion.toggle(2);
    let html = render_faq(accordion);

    assert!(html.contains(FAQS[2].answer));
    assert!(!html.contains(FAQS[0].answer));
    assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
}

#[test]
fn faq_toggling_open_entry_leaves_none_expanded() {
    let mut accordion = FaqAccordion::new();
    accordion.toggle(0);
    let html = render_faq(accordion);

    assert_eq!(html.matches("data-faq-state=\"open\"").count(), 0);
    assert_eq!(html.matches("data-faq-state=\"closed\"").count(), 3);
    assert!(FAQS.iter().all(|f| !html.contains(f.answer)));
    assert_eq!(html.matches('−').count(), 0);
    assert_eq!(html.matches('+').count(), 3);
}

#[test]
fn faq_entries_keyed_by_question_in_order() {
    let html = render(|| view! { <Faq faqs=FAQS /> });
    let questions: Vec<&str> = FAQS.iter().map(|f| f.question).collect();
    assert_eq!(data_keys(&html), questions);
}

#[test]
fn faq_with_no_entries_renders_empty_list() {
    static NONE: &[FaqEntry] = &[];
    let html = render(|| view! { <Faq faqs=NONE /> });
    assert!(html.contains("Common Questions"));
    assert!(data_keys(&html).is_empty());
}

// ---------------------------------------------------------------------------
// Navigation disclosure
// ---------------------------------------------------------------------------

#[test]
fn nav_starts_with_mobile_menu_hidden() {
    let html = render(|| {
        view! { <Nav brand={&BRAND} items=NAV_ITEMS logo_url="/logo.png" /> }
    });

    assert!(!html.contains("id=\"mobile-menu\""));
    assert!(html.contains("aria-expanded=\"false\""));
    let hrefs: Vec<&str> = NAV_ITEMS.iter().map(|n| n.href).collect();
    assert_eq!(data_keys(&html), hrefs);
}

#[test]
fn nav_open_shows_mobile_links() {
    let mut disclosure = NavDisclosure::new();
    disclosure.open_menu();
    let html = render_nav(disclosure);

    assert!(html.contains("id=\"mobile-menu\""));
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("aria-label=\"Close menu\""));
    // desktop row + mobile drawer
    assert_eq!(data_keys(&html).len(), NAV_ITEMS.len() * 2);
}

#[test]
fn nav_close_hides_mobile_links() {
    let mut disclosure = NavDisclosure::new();
    disclosure.open_menu();
    disclosure.close_menu();
    let html = render_nav(disclosure);

    assert!(!html.contains("id=\"mobile-menu\""));
}

#[test]
fn nav_link_selection_closes_menu_and_targets_section() {
    let mut disclosure = NavDisclosure::new();
    disclosure.open_menu();
    let target = disclosure.select_link(&NAV_ITEMS[1]);
    let html = render_nav(disclosure);

    assert_eq!(target, "programs");
    assert!(!html.contains("id=\"mobile-menu\""));
    assert!(html.contains("href=\"#programs\""));
}

#[test]
fn nav_renders_logo_with_brand_alt_text() {
    let html = render_nav(NavDisclosure::new());
    assert!(html.contains("src=\"/logo.png\""));
    assert!(html.contains("alt=\"Afsah Institute logo\""));
}

// ---------------------------------------------------------------------------
// Static sections
// ---------------------------------------------------------------------------

#[test]
fn programs_render_one_card_per_entry_in_order() {
    let html = render(|| view! { <Programs programs=PROGRAMS /> });
    let titles: Vec<&str> = PROGRAMS.iter().map(|p| p.title).collect();

    assert_eq!(data_keys(&html), titles);
    assert_eq!(html.matches("<article").count(), 4);
    assert!(html.contains("Limited to 7 students for high quality outcome"));
}

#[test]
fn programs_with_empty_input_render_empty_grid() {
    static NONE: &[ProgramEntry] = &[];
    let html = render(|| view! { <Programs programs=NONE /> });

    assert!(html.contains("Paths of Study"));
    assert_eq!(html.matches("<article").count(), 0);
}

#[test]
fn faculty_render_one_card_per_member_in_order() {
    let html = render(|| view! { <Faculty members=FACULTY /> });
    let names: Vec<&str> = FACULTY.iter().map(|f| f.name).collect();

    assert_eq!(data_keys(&html), names);
    assert!(html.contains("Lead Instructor for Females"));
}

#[test]
fn faculty_with_empty_input_render_no_cards() {
    static NONE: &[FacultyMember] = &[];
    let html = render(|| view! { <Faculty members=NONE /> });
    assert!(data_keys(&html).is_empty());
}

#[test]
fn about_renders_both_cards() {
    let html = render(|| view! { <About cards=ABOUT_CARDS /> });
    assert_eq!(data_keys(&html), vec!["Our Classes", "Student Experience"]);
}

#[test]
fn contact_form_has_three_required_fields_and_mailto_action() {
    let html = render(|| view! { <Contact brand={&BRAND} /> });

    assert_eq!(html.matches("required").count(), 3);
    for field in CONTACT_FIELDS {
        assert!(html.contains(&format!("name=\"{}\"", field.name)), "{} missing", field.name);
    }
    assert!(html.contains("type=\"email\""));
    assert!(html.contains("rows=\"4\""));
    assert!(html.contains("action=\"mailto:admissions@afsah.institute\""));
    assert!(html.contains("enctype=\"text/plain\""));
    assert_eq!(html.matches("type=\"submit\"").count(), 1);
    assert_eq!(data_keys(&html), vec!["name", "email", "message"]);
}

#[test]
fn contact_shows_hotline() {
    let html = render(|| view! { <Contact brand={&BRAND} /> });
    assert!(html.contains("Admissions Hotline"));
    assert!(html.contains(BRAND.contact_phone));
}

#[test]
fn footer_renders_year_and_links() {
    let html = render(|| view! { <Footer brand={&BRAND} links=FOOTER_LINKS year=2025 /> });

    assert!(html.contains("© 2025 Afsah Institute. All rights reserved."));
    assert_eq!(
        data_keys(&html),
        vec!["#about", "#programs", "#admissions", "#contact"]
    );
}
