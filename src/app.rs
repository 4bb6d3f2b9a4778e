mod about;
mod backdrop;
mod contact;
mod hero;
mod icons;
mod loading;
mod nav;
mod projects;
mod skills;
mod store;
mod tracking;

use leptos::prelude::*;
use leptos_meta::*;

use crate::content::portfolio;
use crate::state::UiState;
use about::About;
use backdrop::{CodeRain, Grid};
use contact::{Contact, Footer};
use hero::Hero;
use loading::{use_startup_sequence, LoadingScreen};
use nav::{NavBar, ScrollTopButton};
use projects::Projects;
use skills::Skills;
use store::{use_store, Store};
use tracking::use_viewport_tracker;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let store = Store::new();
    provide_context(store);
    use_startup_sequence(store);
    let is_loading = store.select(UiState::is_loading);

    let profile = &portfolio().profile;

    view! {
        <Title text={format!("{} - Portfolio", profile.name)} />
        <Meta name="description" content={format!("{}, {}", profile.name, profile.role)} />
        <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen /> }>
            <Page />
        </Show>
    }
}

/// Everything behind the splash screen. Mounted once loading finishes, which
/// is also when the scroll and reveal trackers start.
#[component]
fn Page() -> impl IntoView {
    use_viewport_tracker(use_store());

    view! {
        <div class="min-h-screen bg-black text-white overflow-x-hidden relative font-mono">
            <CodeRain />
            <Grid />
            <div class="relative z-20">
                <NavBar />
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Contact />
                <Footer />
                <ScrollTopButton />
            </div>
        </div>
    }
}
