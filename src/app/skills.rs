use leptos::prelude::*;

use super::tracking::Reveal;
use crate::content::{portfolio, SkillEntry};
use crate::navigation::NavSection;
use crate::reveal::{self, Slide};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=NavSection::Skills.id() class="min-h-screen flex items-center justify-center px-4 py-20">
            <div class="max-w-6xl w-full">
                <Reveal id="skills-title" slide=Slide::FromBelow class="mb-12">
                    <h2 class="text-5xl md:text-6xl font-bold">
                        <span class="text-green-500">"const"</span>
                        " skills = ["
                    </h2>
                </Reveal>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6">
                    {portfolio()
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard index skill /> })
                        .collect_view()}
                </div>
                <h2 class="text-5xl md:text-6xl font-bold mt-12">
                    <span class="text-green-500">"];"</span>
                </h2>
            </div>
        </section>
    }
}

/// Skill icon with its name. If the remote icon can't be loaded, a badge with
/// the first letter of the name takes its place.
#[component]
fn SkillCard(index: usize, skill: &'static SkillEntry) -> impl IntoView {
    let (icon_failed, set_icon_failed) = signal(false);
    let delay_ms = index as u32 * reveal::SKILL_STAGGER_MS;

    view! {
        <Reveal
            id=reveal::skill_id(index)
            slide=Slide::FromBelow
            delay_ms
            duration=None
            class="bg-black border-2 border-green-500/50 p-6 rounded-lg hover:border-green-500 transform hover:scale-110 hover:shadow-2xl hover:shadow-green-500/20 text-center"
        >
            <img
                src=skill.icon_url.clone()
                alt=skill.name.clone()
                class="w-16 h-16 mx-auto mb-4"
                class:hidden=move || icon_failed.get()
                on:error=move |_| {
                    log::debug!("icon for {} failed to load", skill.name);
                    set_icon_failed.set(true);
                }
            />
            <div
                class="w-16 h-16 mx-auto mb-4 bg-green-500/10 rounded-lg items-center justify-center"
                class:hidden=move || !icon_failed.get()
                class:flex=move || icon_failed.get()
            >
                <span class="text-2xl text-green-500">{skill.fallback_glyph()}</span>
            </div>
            <p class="font-bold text-white text-sm">{format!("\"{}\"", skill.name)}</p>
        </Reveal>
    }
}
