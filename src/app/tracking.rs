use std::cell::Cell;
use std::rc::Rc;

use leptos::{ev, html, prelude::*};
use leptos_use::{
    js, use_event_listener, use_intersection_observer_with_options, use_supported, use_window,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::store::{use_store, Store};
use crate::navigation::{self, NavSection};
use crate::reveal::{self, Slide};
use crate::state::UiEvent;
use crate::viewport::{self, SectionBounds, Viewport};

/// The live browser window.
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_bounds(&self, section: NavSection) -> Option<SectionBounds> {
        let rect = document()
            .get_element_by_id(section.id())?
            .get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn scroll_into_view(&self, section: NavSection) {
        if let Some(el) = document().get_element_by_id(section.id()) {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }

    fn scroll_to_top(&self) {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn go_to_section(store: Store, id: &str) {
    match navigation::scroll_to_section(&DomViewport, id) {
        Ok(event) => store.dispatch(event),
        Err(err) => log::debug!("navigation skipped: {err}"),
    }
}

pub fn go_to_top() {
    navigation::scroll_to_top(&DomViewport);
}

/// Follows window scrolling for as long as the calling component lives.
///
/// Scroll events are coalesced so the section probe runs at most once per
/// animation frame.
pub fn use_viewport_tracker(store: Store) {
    let frame_pending = Rc::new(Cell::new(false));
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if frame_pending.replace(true) {
            return;
        }
        let frame_pending = Rc::clone(&frame_pending);
        request_animation_frame(move || {
            frame_pending.set(false);
            store.dispatch(viewport::sample(&DomViewport));
        });
    });
    // pick up a restored scroll position once the page has been laid out
    request_animation_frame(move || store.dispatch(viewport::sample(&DomViewport)));
}

/// Wrapper that slides its children into place the first time it scrolls
/// into view.
///
/// `duration` is the transition length utility. Pass `None` to keep the
/// default.
#[component]
pub fn Reveal(
    #[prop(into)] id: String,
    slide: Slide,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_ms: u32,
    #[prop(default = Some(reveal::SLOW_DURATION))] duration: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let store = use_store();
    let target = NodeRef::<html::Div>::new();

    let revealed = {
        let id = id.clone();
        store.select(move |s| s.is_revealed(&id))
    };

    let supported = use_supported(|| js!("IntersectionObserver" in &window())).get_untracked();
    if supported {
        let observed_id = id.clone();
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                if entries.iter().any(|entry| entry.is_intersecting()) {
                    store.dispatch(UiEvent::Revealed(observed_id.clone()));
                }
            },
            UseIntersectionObserverOptions::default()
                .thresholds(vec![reveal::THRESHOLD])
                .root_margin(reveal::ROOT_MARGIN.to_string()),
        );
        Effect::new(move |_| {
            if revealed.get() {
                stop();
            }
        });
    } else {
        log::warn!("IntersectionObserver unavailable, showing {id} immediately");
    }
    for event in reveal::initial_events(&id, supported) {
        store.dispatch(event);
    }

    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div
            id=id
            node_ref=target
            style=style
            class=move || reveal::wrapper_classes(class, duration, slide, revealed.get())
        >
            {children()}
        </div>
    }
}
