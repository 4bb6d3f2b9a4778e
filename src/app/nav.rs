use leptos::prelude::*;

use super::icons::{self, Icon};
use super::store::use_store;
use super::tracking::{go_to_section, go_to_top};
use crate::navigation::NavSection;
use crate::state::{UiEvent, UiState};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_store();
    let compact = store.select(UiState::nav_is_compact);
    let menu_open = store.select(UiState::is_menu_open);
    let active = store.select(UiState::active_section);

    let links = NavSection::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    on:click=move |_| go_to_section(store, section.id())
                    class=move || {
                        if active.get() == section {
                            "capitalize transition-all duration-300 text-green-500"
                        } else {
                            "capitalize transition-all duration-300 text-gray-400 hover:text-green-500"
                        }
                    }
                >
                    "<"
                    {section.id()}
                    " />"
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            format!(
                "fixed top-4 left-1/2 transform -translate-x-1/2 transition-all duration-300 z-50 w-11/12 {}",
                if compact.get() { "max-w-5xl" } else { "max-w-6xl" },
            )
        }>
            <div class="bg-black/80 backdrop-blur-xl rounded-lg border-2 border-green-500/50 shadow-2xl shadow-green-500/20">
                <div class="flex justify-between items-center px-6 py-4">
                    <div class="flex items-center gap-3">
                        <WindowDots />
                        <span class="text-green-500 font-bold">"~/fouad-portfolio"</span>
                    </div>
                    <div class="hidden md:flex space-x-6">{links}</div>
                    <button
                        class="md:hidden text-green-500"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| store.dispatch(UiEvent::MenuToggled)
                    >
                        {move || {
                            let paths = if menu_open.get() { icons::CLOSE } else { icons::MENU };
                            view! { <Icon paths class="w-6 h-6" /> }
                        }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <MobileMenu />
            </Show>
        </nav>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let store = use_store();
    view! {
        <div class="md:hidden mt-4 bg-black/90 backdrop-blur-xl rounded-lg border-2 border-green-500/50 overflow-hidden">
            {NavSection::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            on:click=move |_| go_to_section(store, section.id())
                            class="block w-full text-left px-6 py-4 capitalize hover:bg-green-500/10 transition-all border-b border-green-500/20 last:border-b-0"
                        >
                            <span class="text-green-500">">"</span>
                            " "
                            {section.id()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// The red/yellow/green dots of a terminal window title bar.
#[component]
pub fn WindowDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <div class="w-3 h-3 rounded-full bg-red-500"></div>
            <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
            <div class="w-3 h-3 rounded-full bg-green-500"></div>
        </div>
    }
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let store = use_store();
    let visible = store.select(UiState::show_scroll_top);
    view! {
        <Show when=move || visible.get()>
            <button
                on:click=move |_| go_to_top()
                aria-label="Scroll to top"
                class="fixed bottom-8 right-8 bg-green-500 text-black p-4 rounded-lg shadow-2xl shadow-green-500/50 hover:scale-110 transition-all z-50 border-2 border-green-500"
            >
                <Icon paths=icons::CHEVRON_UP class="w-6 h-6" />
            </button>
        </Show>
    }
}
