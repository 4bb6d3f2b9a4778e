use leptos::prelude::*;

// Stroke paths on a 24x24 grid, in the style of the Lucide icon set.
pub const TERMINAL: &[&str] = &["m4 17 6-6-6-6", "M12 19h8"];
pub const MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];
pub const CLOSE: &[&str] = &["M18 6 6 18", "m6 6 12 12"];
pub const CHEVRON_UP: &[&str] = &["m18 15-6-6-6 6"];
pub const CODE: &[&str] = &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"];
pub const EXTERNAL_LINK: &[&str] = &[
    "M15 3h6v6",
    "M10 14 21 3",
    "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
];
pub const MAIL: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
];

#[component]
pub fn Icon(paths: &'static [&'static str], #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
