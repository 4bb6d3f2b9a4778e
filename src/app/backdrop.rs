use leptos::prelude::*;

use super::store::use_store;

const GRID_STYLE: &str = "background-image: linear-gradient(rgba(34, 197, 94, 0.1) 1px, transparent 1px), linear-gradient(90deg, rgba(34, 197, 94, 0.1) 1px, transparent 1px); background-size: 50px 50px";

/// Falling code characters. The drops are fixed once loading finishes, so
/// they are read once rather than tracked.
#[component]
pub fn CodeRain() -> impl IntoView {
    let drops = use_store().with_untracked(|s| s.rain_drops().to_vec());

    view! {
        <div class="fixed inset-0 z-0 overflow-hidden opacity-20" aria-hidden="true">
            {drops
                .into_iter()
                .map(|drop| {
                    view! {
                        <div class="absolute text-green-500 text-sm animate-fall" style=drop.style()>
                            {drop.glyph.to_string()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Grid() -> impl IntoView {
    view! { <div class="fixed inset-0 z-0" style=GRID_STYLE aria-hidden="true"></div> }
}
