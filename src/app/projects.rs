use leptos::{either::*, prelude::*};

use super::icons::{self, Icon};
use super::nav::WindowDots;
use super::tracking::Reveal;
use crate::content::{portfolio, ProjectEntry};
use crate::navigation::NavSection;
use crate::reveal::{self, Slide};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=NavSection::Projects.id() class="min-h-screen flex items-center justify-center px-4 py-20">
            <div class="max-w-7xl w-full">
                <Reveal id="projects-title" slide=Slide::FromBelow class="mb-12">
                    <h2 class="text-5xl md:text-6xl font-bold">
                        <span class="text-green-500">"<projects>"</span>
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {portfolio()
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard index project /> })
                        .collect_view()}
                </div>
                <h2 class="text-5xl md:text-6xl font-bold mt-12">
                    <span class="text-green-500">"</projects>"</span>
                </h2>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: &'static ProjectEntry) -> impl IntoView {
    let delay_ms = index as u32 * reveal::PROJECT_STAGGER_MS;

    view! {
        <Reveal
            id=reveal::project_id(index)
            slide=Slide::FromLeft
            delay_ms
            duration=None
            class="bg-black border-2 border-green-500/50 rounded-lg overflow-hidden hover:border-green-500 transform hover:scale-105 hover:shadow-2xl hover:shadow-green-500/20"
        >
            <div class="border-b-2 border-green-500/50 p-3 flex items-center gap-2">
                <WindowDots />
                <span class="text-xs text-green-500 ml-2">{project.file_name()}</span>
            </div>

            <div class="h-48 bg-gray-900 flex items-center justify-center border-b-2 border-green-500/20">
                {match &project.screenshot_url {
                    Some(url) => {
                        Either::Left(
                            view! {
                                <img
                                    src=url.clone()
                                    alt={format!("{} screenshot", project.title)}
                                    class="w-full h-full object-cover"
                                />
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! { <Icon paths=icons::CODE class="w-16 h-16 text-green-500/50" /> },
                        )
                    }
                }}
            </div>

            <div class="p-6">
                <h3 class="text-xl font-bold mb-3 text-green-500">
                    "function "
                    <span class="text-white">{format!("{}()", project.function_name())}</span>
                    " {"
                </h3>
                <p class="text-gray-400 mb-4 leading-relaxed text-sm pl-4">
                    <span class="text-gray-500">"//"</span>
                    " "
                    {project.description.clone()}
                </p>

                <div class="mb-4 p-3 bg-green-500/5 rounded border border-green-500/30 pl-4">
                    <p class="text-xs text-green-500 mb-1">"return {features: ["</p>
                    <p class="text-xs text-gray-300 pl-4">{format!("\"{}\"", project.business_value)}</p>
                    <p class="text-xs text-green-500">"]}"</p>
                </div>

                <div class="flex flex-wrap gap-2 mb-4 pl-4">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-green-500/10 text-green-500 rounded text-xs border border-green-500/30">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="text-white mb-4 pl-4">"}"</p>

                {project
                    .live_url
                    .as_ref()
                    .map(|url| {
                        view! {
                            <a
                                href=url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 text-green-500 hover:text-green-400 transition-colors pl-4"
                            >
                                <Icon paths=icons::EXTERNAL_LINK class="w-4 h-4" />
                                <span class="text-sm">"view_live()"</span>
                            </a>
                        }
                    })}
            </div>
        </Reveal>
    }
}
