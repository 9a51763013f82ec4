use leptos::prelude::*;

use super::{Container, Ornament, SectionTitle};
use crate::content::AboutCard;

#[component]
pub fn About(cards: &'static [AboutCard]) -> impl IntoView {
    view! {
        <section id="about" class="section">
            <Container>
                <SectionTitle eyebrow="About" title="Arabic and Quranic Mastery" />
                <div class="grid grid-2 about-grid">
                    {cards
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="card" data-key=card.title>
                                    <h3 class="card-title font-serif">{card.title}</h3>
                                    <p class="card-body">{card.body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Container>
            <Ornament />
        </section>
    }
}
