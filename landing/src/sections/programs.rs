use leptos::prelude::*;

use super::{Container, Icon, Ornament, SectionTitle};
use crate::content::ProgramEntry;

/// One card per program, keyed by title.
#[component]
pub fn Programs(programs: &'static [ProgramEntry]) -> impl IntoView {
    view! {
        <section id="programs" class="section section-paper">
            <Container>
                <SectionTitle
                    eyebrow="Programs"
                    title="Paths of Study"
                    sub="From foundational studies to full-time Hifdh, choose the track that fits your goals."
                />
                <div class="grid grid-3 programs-grid">
                    {programs
                        .iter()
                        .map(|program| view! { <ProgramCard program=program /> })
                        .collect::<Vec<_>>()}
                </div>
            </Container>
            <Ornament />
        </section>
    }
}

#[component]
fn ProgramCard(program: &'static ProgramEntry) -> impl IntoView {
    view! {
        <article class="card program-card" data-key=program.title>
            <div class="program-icon">
                <Icon kind=program.icon />
            </div>
            <h3 class="card-title font-serif">{program.title}</h3>
            <p class="card-body">{program.description}</p>
            <ul class="program-highlights">
                {program
                    .highlights
                    .iter()
                    .map(|h| view! { <li>{*h}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
