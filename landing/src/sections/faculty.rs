use leptos::prelude::*;

use super::{Container, Ornament, SectionTitle};
use crate::content::FacultyMember;

#[component]
pub fn Faculty(members: &'static [FacultyMember]) -> impl IntoView {
    view! {
        <section id="faculty" class="section">
            <Container>
                <SectionTitle
                    eyebrow="Faculty"
                    title="Guided by Teachers"
                    sub="Learn with instructors committed to your growth."
                />
                <div class="grid grid-3 faculty-grid">
                    {members
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="card faculty-card" data-key=member.name>
                                    <div class="faculty-avatar" aria-hidden="true"></div>
                                    <h3 class="faculty-name font-serif">{member.name}</h3>
                                    <p class="faculty-role">{member.role}</p>
                                    <p class="card-body">{member.bio}</p>
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
