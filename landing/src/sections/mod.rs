//! Page sections, in the order the page renders them.
//!
//! Every section takes its content as props (a `&'static` slice or the
//! brand record) and emits one block per element, tagged with a
//! `data-key` attribute holding the element's unique field.

mod about;
mod admissions;
mod contact;
mod faculty;
mod faq;
mod footer;
mod hero;
mod icons;
mod layout;
mod nav;
mod programs;

pub use about::About;
pub use admissions::Admissions;
pub use contact::{CONTACT_FIELDS, Contact, ContactField, FieldKind};
pub use faculty::Faculty;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{Icon, IconKind};
pub use layout::{Container, Ornament, SectionTitle};
pub use nav::Nav;
pub use programs::Programs;
