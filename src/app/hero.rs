use leptos::prelude::*;

use super::icons::{self, Icon};
use super::nav::WindowDots;
use super::store::use_store;
use super::tracking::{go_to_section, Reveal};
use crate::content::portfolio;
use crate::navigation::NavSection;
use crate::reveal::Slide;

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_store();
    let profile = &portfolio().profile;
    // split "First Last" so the surname can sit on its own animated line
    let (first, rest) = profile
        .name
        .split_once(' ')
        .unwrap_or((profile.name.as_str(), ""));

    view! {
        <section id=NavSection::Home.id() class="min-h-screen flex items-center justify-center px-4 pt-24">
            <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                <Reveal id="hero-text" slide=Slide::FromLeft class="space-y-6">
                    <div class="flex items-center gap-2 text-green-500">
                        <Icon paths=icons::TERMINAL class="w-5 h-5" />
                        <span class="text-sm">"const developer = {"</span>
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold leading-tight pl-6">
                        <span class="text-gray-500">"name:"</span>
                        <span class="text-white">{format!(" \"{first}")}</span>
                        <span class="block text-green-500 animate-pulse">{format!("{rest}\"")}</span>
                    </h1>
                    <p class="text-xl text-gray-400 leading-relaxed pl-6">
                        <span class="text-gray-500">"role:"</span>
                        " "
                        <span class="text-white">{format!("\"{}\"", profile.role)}</span>
                        ","
                        <br />
                        <span class="text-gray-500">"passion:"</span>
                        " "
                        <span class="text-white">{format!("\"{}\"", profile.passion)}</span>
                    </p>
                    <div class="pl-6 text-gray-500">"}"</div>
                    <button
                        on:click=move |_| go_to_section(store, NavSection::Projects.id())
                        class="bg-green-500 text-black px-8 py-4 rounded font-bold transition-all transform hover:scale-105 hover:shadow-2xl hover:shadow-green-500/50 inline-flex items-center gap-2 ml-6"
                    >
                        <Icon paths=icons::CODE class="w-5 h-5" />
                        "view_projects()"
                    </button>
                </Reveal>

                <Reveal id="hero-image" slide=Slide::FromRight class="relative delay-300">
                    <div class="relative w-full max-w-md mx-auto">
                        <div class="absolute -inset-4 border-2 border-green-500/30 rounded-lg"></div>
                        <div class="relative bg-black border-2 border-green-500 rounded-lg p-6">
                            <div class="mb-4">
                                <WindowDots />
                            </div>
                            <div class="aspect-square bg-gray-900 rounded flex items-center justify-center border border-green-500/50 overflow-hidden">
                                <img
                                    src=profile.headshot_url.clone()
                                    alt=profile.name.clone()
                                    class="w-full h-full object-cover"
                                />
                            </div>
                            <div class="mt-4 text-green-500 text-sm">
                                <span class="text-gray-500">">"</span>
                                " ./headshot.jpg"
                            </div>
                        </div>
                        <div class="absolute -bottom-2 -right-2 bg-green-500 text-black px-3 py-1 text-xs rounded">
                            "ONLINE"
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
