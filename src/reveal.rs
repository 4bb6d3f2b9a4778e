use std::collections::BTreeSet;

use crate::state::UiEvent;

/// Share of an element that must be visible before it reveals.
pub const THRESHOLD: f64 = 0.1;
/// Pulls the bottom of the observed area up so elements reveal slightly
/// before they reach the bottom edge of the viewport.
pub const ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Transition length for section-level reveals. Cards leave it off and keep
/// the utility default so hover effects stay snappy.
pub const SLOW_DURATION: &str = "duration-1000";

pub const SKILL_STAGGER_MS: u32 = 100;
pub const PROJECT_STAGGER_MS: u32 = 200;

pub fn skill_id(index: usize) -> String {
    format!("skill-{index}")
}

pub fn project_id(index: usize) -> String {
    format!("project-{index}")
}

/// Direction an element slides in from when revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    FromLeft,
    FromRight,
    FromBelow,
}

impl Slide {
    pub fn classes(self, revealed: bool) -> &'static str {
        match (self, revealed) {
            (Slide::FromLeft | Slide::FromRight, true) => "opacity-100 translate-x-0",
            (Slide::FromBelow, true) => "opacity-100 translate-y-0",
            (Slide::FromLeft, false) => "opacity-0 -translate-x-20",
            (Slide::FromRight, false) => "opacity-0 translate-x-20",
            (Slide::FromBelow, false) => "opacity-0 translate-y-20",
        }
    }
}

/// Events a tagged element emits as it mounts. Without an intersection
/// observer there is nothing to wait for, so it shows itself straight away.
pub fn initial_events(id: &str, observer_supported: bool) -> Vec<UiEvent> {
    if observer_supported {
        Vec::new()
    } else {
        vec![UiEvent::Revealed(id.to_string())]
    }
}

/// Full class list of a reveal wrapper.
pub fn wrapper_classes(
    class: &str,
    duration: Option<&str>,
    slide: Slide,
    revealed: bool,
) -> String {
    [class, "transition-all", duration.unwrap_or_default(), slide.classes(revealed)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ids of elements that have been revealed. Grows only; an element never
/// animates twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealSet(BTreeSet<String>);

impl RevealSet {
    /// Returns whether `id` was newly revealed.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
