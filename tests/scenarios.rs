use std::cell::RefCell;

use portfolio_site::navigation::{self, NavError, NavSection};
use portfolio_site::rain;
use portfolio_site::startup;
use portfolio_site::state::{UiEvent, UiState};
use portfolio_site::viewport::{self, SectionBounds, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Page with every section 1000px tall, scrolled to `offset`.
struct Page {
    offset: f64,
    scrolls: RefCell<Vec<NavSection>>,
}

impl Page {
    fn at(offset: f64) -> Self {
        Self {
            offset,
            scrolls: RefCell::new(Vec::new()),
        }
    }
}

impl Viewport for Page {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn section_bounds(&self, section: NavSection) -> Option<SectionBounds> {
        let index = NavSection::ALL.iter().position(|s| *s == section)?;
        let top = index as f64 * 1000.0 - self.offset;
        Some(SectionBounds {
            top,
            bottom: top + 1000.0,
        })
    }

    fn scroll_into_view(&self, section: NavSection) {
        self.scrolls.borrow_mut().push(section);
    }

    fn scroll_to_top(&self) {}
}

fn mounted_and_loaded() -> UiState {
    let mut state = UiState::default();
    let mut elapsed = 0;
    while !state.loading_complete() {
        elapsed += startup::TICK_INTERVAL_MS;
        state.apply(UiEvent::LoadingTick);
    }
    assert_eq!(elapsed, 10 * startup::TICK_INTERVAL_MS);
    assert_eq!(state.loading_progress(), 100);
    assert!(state.is_loading());

    elapsed += startup::FINISH_DELAY_MS;
    state.apply(UiEvent::LoadingFinished {
        rain: rain::generate(&mut StdRng::seed_from_u64(elapsed)),
    });
    // ten 150 ms ticks, then the 500 ms finish delay
    assert_eq!(elapsed, 2000);
    state
}

#[test]
fn startup_shows_page_after_ten_ticks_and_delay() {
    let state = mounted_and_loaded();
    assert!(!state.is_loading());
    assert_eq!(state.rain_drops().len(), rain::DROP_COUNT);
}

#[test]
fn hero_text_reveals_once() {
    let mut state = mounted_and_loaded();
    state.apply(UiEvent::Revealed("hero-text".to_string()));
    assert!(state.is_revealed("hero-text"));
    let size = state.revealed().len();
    state.apply(UiEvent::Revealed("hero-text".to_string()));
    assert_eq!(state.revealed().len(), size);
}

#[test]
fn scroll_top_control_follows_offset() {
    let mut state = mounted_and_loaded();
    state.apply(viewport::sample(&Page::at(500.0)));
    assert!(state.show_scroll_top());
    state.apply(viewport::sample(&Page::at(100.0)));
    assert!(!state.show_scroll_top());
}

#[test]
fn scrolling_down_walks_through_sections() {
    let mut state = mounted_and_loaded();
    for (offset, expected) in [
        (0.0, NavSection::Home),
        (1000.0, NavSection::About),
        (2500.0, NavSection::Skills),
        (3050.0, NavSection::Projects),
        (4200.0, NavSection::Contact),
    ] {
        state.apply(viewport::sample(&Page::at(offset)));
        assert_eq!(state.active_section(), expected, "offset {offset}");
    }
}

#[test]
fn navigating_to_projects_selects_and_closes_menu() {
    let mut state = mounted_and_loaded();
    state.apply(UiEvent::MenuToggled);
    let page = Page::at(0.0);

    let event = navigation::scroll_to_section(&page, "projects").expect("known section");
    state.apply(event);

    assert_eq!(state.active_section(), NavSection::Projects);
    assert!(!state.is_menu_open());
    assert_eq!(*page.scrolls.borrow(), vec![NavSection::Projects]);
}

#[test]
fn navigating_to_unknown_section_is_ignored() {
    let mut state = mounted_and_loaded();
    state.apply(UiEvent::MenuToggled);
    let before = state.clone();

    let res = navigation::scroll_to_section(&Page::at(0.0), "pricing");

    assert_eq!(res, Err(NavError::UnknownSection("pricing".to_string())));
    assert_eq!(state, before);
}
