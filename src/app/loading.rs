use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use super::icons::{self, Icon};
use super::store::{use_store, Store};
use crate::rain;
use crate::startup;
use crate::state::{UiEvent, UiState};

/// Drives the splash screen: fills the progress bar on a fixed interval, then
/// lets the page through after a short pause.
///
/// The interval stops as soon as the bar is full. Both the interval and the
/// trailing timeout are cleared if the owning component goes away first.
pub fn use_startup_sequence(store: Store) {
    let Pausable { pause, .. } = use_interval_fn(
        move || store.dispatch(UiEvent::LoadingTick),
        startup::TICK_INTERVAL_MS,
    );

    let complete = store.select(UiState::loading_complete);
    Effect::new(move |_| {
        if !complete.get() {
            return;
        }
        pause();
        let finish = move || {
            let drops = rain::generate(&mut rand::thread_rng());
            store.dispatch(UiEvent::LoadingFinished { rain: drops });
        };
        match set_timeout_with_handle(finish, Duration::from_millis(startup::FINISH_DELAY_MS)) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => log::error!("couldn't schedule end of loading: {err:?}"),
        }
    });
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let store = use_store();
    let progress = store.select(UiState::loading_progress);

    view! {
        <div class="fixed inset-0 bg-black flex items-center justify-center z-50">
            <div class="text-center">
                <Icon paths=icons::TERMINAL class="w-16 h-16 text-green-500 mx-auto mb-6 animate-pulse" />
                <div class="font-mono text-green-500 mb-4">
                    <span class="text-2xl">"> Loading Portfolio..."</span>
                </div>
                <div class="w-64 h-2 bg-gray-800 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-green-500 to-emerald-500 transition-all duration-300"
                        style=move || format!("width: {}%", progress.get())
                    ></div>
                </div>
                <div class="font-mono text-green-500 mt-4 text-sm">
                    {move || progress.get()}
                    "% complete"
                </div>
            </div>
        </div>
    }
}
