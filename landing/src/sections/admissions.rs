use leptos::prelude::*;

use super::{Container, Icon, IconKind, Ornament, SectionTitle};
use crate::content::KeyDate;

#[component]
pub fn Admissions(dates: &'static [KeyDate]) -> impl IntoView {
    view! {
        <section id="admissions" class="section section-fade">
            <Container>
                <SectionTitle
                    eyebrow="Admissions"
                    title="Join the Next Cohort"
                    sub="Limited seats to preserve quality. Early applications encouraged."
                />
                <div class="grid grid-2 admissions-grid">
                    <div class="card">
                        <h3 class="card-title font-serif">"Key Dates"</h3>
                        <ul class="key-dates">
                            {dates
                                .iter()
                                .map(|date| {
                                    view! {
                                        <li data-key=date.label>
                                            <strong>{date.label}</strong>
                                            " "
                                            {date.value}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                        <a href="#contact" class="btn btn-primary btn-sm">
                            "Contact Admissions"
                            <Icon kind=IconKind::ChevronRight class="icon icon-sm" />
                        </a>
                    </div>
                </div>
            </Container>
            <Ornament />
        </section>
    }
}
