use leptos::prelude::*;

use super::icons::{self, Icon};
use super::tracking::Reveal;
use crate::content::{copyright_year, portfolio};
use crate::navigation::NavSection;
use crate::reveal::Slide;

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &portfolio().contact;

    view! {
        <section id=NavSection::Contact.id() class="min-h-screen flex items-center justify-center px-4 py-20">
            <div class="max-w-4xl w-full">
                <Reveal id="contact-title" slide=Slide::FromBelow class="mb-8">
                    <h2 class="text-5xl md:text-6xl font-bold">
                        <span class="text-green-500">"function"</span>
                        " "
                        <span class="text-white">"getInTouch()"</span>
                        " {"
                    </h2>
                </Reveal>
                <Reveal
                    id="contact-content"
                    slide=Slide::FromBelow
                    class="bg-black border-2 border-green-500/50 rounded-lg p-12 shadow-2xl shadow-green-500/20 delay-200"
                >
                    <p class="text-xl text-gray-300 mb-8 text-center">
                        <span class="text-gray-500">"return"</span>
                        " "
                        <span class="text-green-500">"\"Let's build something amazing together\""</span>
                        ";"
                    </p>
                    <div class="grid md:grid-cols-3 gap-6">
                        <ContactCard href=contact.mailto() label="email:" value=contact.email.clone()>
                            <Icon paths=icons::MAIL class="w-8 h-8 text-green-500 mx-auto mb-4" />
                        </ContactCard>
                        <ContactCard
                            href=contact.github_url.clone()
                            label="github:"
                            value=contact.github_handle.clone()
                        >
                            <i class="devicon-github-plain text-3xl text-green-500 block mb-4"></i>
                        </ContactCard>
                        <ContactCard
                            href=contact.linkedin_url.clone()
                            label="linkedin:"
                            value=contact.linkedin_handle.clone()
                        >
                            <i class="devicon-linkedin-plain text-3xl text-green-500 block mb-4"></i>
                        </ContactCard>
                    </div>
                </Reveal>
                <h2 class="text-5xl md:text-6xl font-bold mt-6">
                    <span class="text-green-500">"}"</span>
                </h2>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(
    href: String,
    label: &'static str,
    value: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer">
            <div class="p-6 bg-green-500/5 rounded-lg border border-green-500/30 hover:border-green-500 transition-all text-center">
                {children()}
                <span class="text-xs text-gray-500 block mb-2">{label}</span>
                <span class="text-gray-400 text-sm">{value}</span>
            </div>
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &portfolio().profile;
    let contact = &portfolio().contact;

    view! {
        <footer class="bg-black border-t-2 border-green-500/50 py-12">
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="text-gray-400">
                        <span class="text-green-500">"©"</span>
                        {format!(" {} {} ", copyright_year(), profile.name)}
                        <span class="text-green-500">"|"</span>
                        " Built with Rust, Leptos & Tailwind"
                    </div>
                    <div class="flex gap-6 text-2xl">
                        <a
                            href=contact.github_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-green-500 transition-colors"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=contact.linkedin_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-green-500 transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href=contact.mailto()
                            class="text-gray-400 hover:text-green-500 transition-colors"
                            aria-label="Email"
                        >
                            <Icon paths=icons::MAIL class="w-6 h-6" />
                        </a>
                    </div>
                </div>
                <div class="text-center mt-6 text-green-500 text-sm">
                    <Icon paths=icons::TERMINAL class="w-4 h-4 inline mr-2" />
                    <span class="text-gray-500">">"</span>
                    " Status: Online and ready to collaborate"
                </div>
            </div>
        </footer>
    }
}
