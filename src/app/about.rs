use leptos::prelude::*;

use super::tracking::Reveal;
use crate::navigation::NavSection;
use crate::reveal::Slide;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=NavSection::About.id() class="min-h-screen flex items-center justify-center px-4 py-20">
            <div class="max-w-4xl">
                <Reveal id="about-title" slide=Slide::FromBelow class="mb-12">
                    <h2 class="text-5xl md:text-6xl font-bold">
                        <span class="text-green-500">"<about>"</span>
                    </h2>
                </Reveal>
                <Reveal
                    id="about-content"
                    slide=Slide::FromBelow
                    class="bg-black border-2 border-green-500/50 rounded-lg p-8 md:p-12 shadow-2xl shadow-green-500/20 delay-200"
                >
                    <div class="space-y-4 text-lg">
                        <Block number="01">
                            "With "
                            <span class="text-green-500 font-bold">"2+ years"</span>
                            " of experience crafting digital experiences, I help businesses stand out online through websites that don't just look beautiful—they "
                            <span class="text-green-500">"work harder"</span>
                            " for you."
                        </Block>
                        <Block number="02">
                            "Whether you need to boost conversions, establish credibility, or scale your online presence, I deliver "
                            <span class="text-green-500">"responsive, fast-loading"</span>
                            " websites optimized for every device. Your success is measured in results: "
                            <span class="text-green-500">"more leads, more sales, more growth"</span>
                            "."
                        </Block>
                    </div>
                </Reveal>
                <h2 class="text-5xl md:text-6xl font-bold mt-6">
                    <span class="text-green-500">"</about>"</span>
                </h2>
            </div>
        </section>
    }
}

/// A numbered paragraph wrapped in braces, like a line-numbered code block.
#[component]
fn Block(number: &'static str, children: Children) -> impl IntoView {
    view! {
        <p class="text-gray-400">
            <span class="text-green-500">{number}</span>
            " "
            <span class="text-white">"{"</span>
        </p>
        <p class="text-gray-300 pl-8">{children()}</p>
        <p class="text-white pl-8">"}"</p>
    }
}
