use leptos::prelude::*;

use super::{Container, Icon, IconKind, Ornament, SectionTitle};
use crate::content::BrandConfig;

/// Input widget for a contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Textarea { rows: u8 },
}

/// A required field of the mailto contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    /// Form control name, sent as the `name=value` line of the mail body
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField { name: "name", label: "Full Name", kind: FieldKind::Text },
    ContactField { name: "email", label: "Email", kind: FieldKind::Email },
    ContactField { name: "message", label: "Message", kind: FieldKind::Textarea { rows: 4 } },
];

/// Contact form posting to the admissions address via the user's mail
/// client, plus the hotline card.
#[component]
pub fn Contact(brand: &'static BrandConfig) -> impl IntoView {
    let mailto = brand.mailto();
    let mailto_href = mailto.clone();

    view! {
        <section id="contact" class="section section-paper">
            <Container>
                <SectionTitle
                    eyebrow="Contact"
                    title="We’d love to hear from you"
                    sub="Reach out for admissions, volunteering, or sponsorship."
                />
                <div class="grid grid-2 contact-grid">
                    <form class="card contact-form" action=mailto method="post" enctype="text/plain">
                        <div class="form-fields">
                            {CONTACT_FIELDS
                                .iter()
                                .map(|field| view! { <FormControl field=field /> })
                                .collect::<Vec<_>>()}
                            <button type="submit" class="btn btn-primary">
                                <Icon kind=IconKind::Mail class="icon icon-sm" />
                                "Send Message"
                            </button>
                        </div>
                        <p class="contact-direct">
                            "Or email us directly: "
                            <a class="underline" href=mailto_href>{brand.contact_email}</a>
                        </p>
                    </form>

                    <div class="card">
                        <h3 class="card-title font-serif">"Admissions Hotline"</h3>
                        <p class="contact-phone">
                            <Icon kind=IconKind::Phone class="icon" />
                            {brand.contact_phone}
                        </p>
                    </div>
                </div>
            </Container>
            <Ornament />
        </section>
    }
}

#[component]
fn FormControl(field: &'static ContactField) -> impl IntoView {
    let id = format!("contact-{}", field.name);
    let control = match field.kind {
        FieldKind::Text => {
            view! { <input id=id.clone() class="form-input" type="text" name=field.name required /> }
                .into_any()
        }
        FieldKind::Email => {
            view! { <input id=id.clone() class="form-input" type="email" name=field.name required /> }
                .into_any()
        }
        FieldKind::Textarea { rows } => view! {
            <textarea id=id.clone() class="form-input" name=field.name rows=rows.to_string() required></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="form-field" data-key=field.name>
            <label for=id class="form-label">{field.label}</label>
            {control}
        </div>
    }
}
