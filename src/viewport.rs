use crate::navigation::NavSection;
use crate::state::UiEvent;

/// Offset past which the scroll-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;
/// Offset past which the floating nav bar narrows.
pub const COMPACT_NAV_THRESHOLD: f64 = 50.0;
/// Horizontal line, measured from the top of the viewport, that decides which
/// section is active.
pub const PROBE_LINE: f64 = 100.0;

/// Bounding box of an anchor element relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn crosses_probe(&self) -> bool {
        self.top <= PROBE_LINE && self.bottom >= PROBE_LINE
    }
}

/// Browser surface the trackers and navigation read from and drive.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;
    /// `None` when the section's anchor element is not in the document.
    fn section_bounds(&self, section: NavSection) -> Option<SectionBounds>;
    fn scroll_into_view(&self, section: NavSection);
    fn scroll_to_top(&self);
}

pub fn shows_scroll_top(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

pub fn is_compact_nav(offset: f64) -> bool {
    offset > COMPACT_NAV_THRESHOLD
}

/// First section, in page order, whose anchor crosses the probe line.
pub fn probe_active_section(viewport: &impl Viewport) -> Option<NavSection> {
    NavSection::ALL.into_iter().find(|section| {
        viewport
            .section_bounds(*section)
            .is_some_and(|bounds| bounds.crosses_probe())
    })
}

/// Reads the viewport once and packages it as a scroll event.
pub fn sample(viewport: &impl Viewport) -> UiEvent {
    UiEvent::Scrolled {
        offset: viewport.scroll_offset(),
        probed: probe_active_section(viewport),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    pub const SECTION_HEIGHT: f64 = 800.0;

    #[derive(Default)]
    pub struct FakeViewport {
        offset: f64,
        bounds: HashMap<NavSection, SectionBounds>,
        scrolled: RefCell<Vec<NavSection>>,
        top_requests: Cell<usize>,
    }

    impl FakeViewport {
        /// Every section stacked top to bottom, `SECTION_HEIGHT` tall each.
        pub fn with_all_sections() -> Self {
            Self::scrolled_by(0.0)
        }

        pub fn scrolled_by(offset: f64) -> Self {
            let bounds = NavSection::ALL
                .into_iter()
                .enumerate()
                .map(|(i, section)| {
                    let top = i as f64 * SECTION_HEIGHT - offset;
                    (
                        section,
                        SectionBounds {
                            top,
                            bottom: top + SECTION_HEIGHT,
                        },
                    )
                })
                .collect();
            Self {
                offset,
                bounds,
                ..Default::default()
            }
        }

        pub fn with_bounds(offset: f64, bounds: &[(NavSection, SectionBounds)]) -> Self {
            Self {
                offset,
                bounds: bounds.iter().copied().collect(),
                ..Default::default()
            }
        }

        pub fn scrolled_to(&self) -> Vec<NavSection> {
            self.scrolled.borrow().clone()
        }

        pub fn top_requests(&self) -> usize {
            self.top_requests.get()
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn section_bounds(&self, section: NavSection) -> Option<SectionBounds> {
            self.bounds.get(&section).copied()
        }

        fn scroll_into_view(&self, section: NavSection) {
            self.scrolled.borrow_mut().push(section);
        }

        fn scroll_to_top(&self) {
            self.top_requests.set(self.top_requests.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!shows_scroll_top(0.0));
        assert!(!shows_scroll_top(100.0));
        assert!(!shows_scroll_top(400.0));
        assert!(shows_scroll_top(400.5));
        assert!(shows_scroll_top(500.0));
    }

    #[test]
    fn nav_compacts_after_fifty() {
        assert!(!is_compact_nav(50.0));
        assert!(is_compact_nav(51.0));
    }

    #[test]
    fn probe_edges_are_inclusive() {
        assert!(SectionBounds {
            top: 100.0,
            bottom: 900.0
        }
        .crosses_probe());
        assert!(SectionBounds {
            top: -700.0,
            bottom: 100.0
        }
        .crosses_probe());
        assert!(!SectionBounds {
            top: 101.0,
            bottom: 900.0
        }
        .crosses_probe());
        assert!(!SectionBounds {
            top: -700.0,
            bottom: 99.0
        }
        .crosses_probe());
    }

    #[test]
    fn probe_tracks_scroll_position() {
        assert_eq!(
            probe_active_section(&FakeViewport::scrolled_by(0.0)),
            Some(NavSection::Home)
        );
        assert_eq!(
            probe_active_section(&FakeViewport::scrolled_by(SECTION_HEIGHT)),
            Some(NavSection::About)
        );
        assert_eq!(
            probe_active_section(&FakeViewport::scrolled_by(3.5 * SECTION_HEIGHT)),
            Some(NavSection::Projects)
        );
    }

    #[test]
    fn probe_prefers_page_order_on_overlap() {
        let overlap = SectionBounds {
            top: 0.0,
            bottom: 200.0,
        };
        let viewport = FakeViewport::with_bounds(
            0.0,
            &[(NavSection::Contact, overlap), (NavSection::Skills, overlap)],
        );
        assert_eq!(probe_active_section(&viewport), Some(NavSection::Skills));
    }

    #[test]
    fn probe_misses_when_no_section_crosses() {
        let viewport = FakeViewport::with_bounds(
            0.0,
            &[(
                NavSection::About,
                SectionBounds {
                    top: 300.0,
                    bottom: 900.0,
                },
            )],
        );
        assert_eq!(probe_active_section(&viewport), None);
        assert_eq!(probe_active_section(&FakeViewport::default()), None);
    }

    #[test]
    fn sample_reports_offset_and_probe() {
        let event = sample(&FakeViewport::scrolled_by(2.0 * SECTION_HEIGHT));
        assert_eq!(
            event,
            UiEvent::Scrolled {
                offset: 1600.0,
                probed: Some(NavSection::Skills)
            }
        );
    }
}
