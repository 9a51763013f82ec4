use leptos::prelude::*;

use super::{Container, Ornament, SectionTitle};
use crate::content::FaqEntry;
use crate::state::FaqAccordion;

/// Single-open accordion over `faqs`.
///
/// Only the selected entry renders its answer; the rest render their
/// question with a "+" marker.
#[component]
pub fn Faq(
    faqs: &'static [FaqEntry],
    /// Starting selection (first entry expanded by default)
    #[prop(optional)]
    initial: FaqAccordion,
) -> impl IntoView {
    let accordion = RwSignal::new(initial);

    view! {
        <section id="faq" class="section">
            <Container>
                <SectionTitle eyebrow="FAQ" title="Common Questions" />
                <div class="card faq-list">
                    {faqs
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <FaqItem entry=entry index=index accordion=accordion /> })
                        .collect::<Vec<_>>()}
                </div>
            </Container>
            <Ornament />
        </section>
    }
}

#[component]
fn FaqItem(
    entry: &'static FaqEntry,
    index: usize,
    accordion: RwSignal<FaqAccordion>,
) -> impl IntoView {
    let expanded = move || accordion.get().is_expanded(index);

    view! {
        <div
            class="faq-item"
            data-key=entry.question
            data-faq-state=move || if expanded() { "open" } else { "closed" }
        >
            <button
                type="button"
                class="faq-question"
                aria-expanded=move || if expanded() { "true" } else { "false" }
                on:click=move |_| accordion.update(|a| a.toggle(index))
            >
                <span class="faq-question-text">{entry.question}</span>
                <span class="faq-indicator" aria-hidden="true">
                    {move || accordion.get().indicator(index).glyph()}
                </span>
            </button>
            <Show when=expanded>
                <div class="faq-answer">{entry.answer}</div>
            </Show>
        </div>
    }
}
