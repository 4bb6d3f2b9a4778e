use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::state::UiEvent;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavSection {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl NavSection {
    /// Page order, which is also the order the viewport probe scans in.
    pub const ALL: [NavSection; 5] = [
        NavSection::Home,
        NavSection::About,
        NavSection::Skills,
        NavSection::Projects,
        NavSection::Contact,
    ];

    /// DOM id of the section's anchor element, doubling as its nav label.
    pub fn id(self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::About => "about",
            NavSection::Skills => "skills",
            NavSection::Projects => "projects",
            NavSection::Contact => "contact",
        }
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NavSection {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavSection::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("no anchor element for section: {0}")]
    MissingAnchor(NavSection),
}

/// Starts a smooth scroll to the section named `id`.
///
/// On success the returned event selects the section right away rather than
/// waiting for the scroll to settle. Unknown ids and absent anchors leave the
/// viewport untouched.
pub fn scroll_to_section(viewport: &impl Viewport, id: &str) -> Result<UiEvent, NavError> {
    let section = id.parse::<NavSection>()?;
    if viewport.section_bounds(section).is_none() {
        return Err(NavError::MissingAnchor(section));
    }
    viewport.scroll_into_view(section);
    Ok(UiEvent::SectionSelected(section))
}

pub fn scroll_to_top(viewport: &impl Viewport) {
    viewport.scroll_to_top();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UiState;
    use crate::viewport::testing::FakeViewport;

    #[test]
    fn parses_every_section_id() {
        for section in NavSection::ALL {
            assert_eq!(section.id().parse::<NavSection>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
    }

    #[test]
    fn rejects_unknown_ids() {
        assert_eq!(
            "blog".parse::<NavSection>(),
            Err(NavError::UnknownSection("blog".to_string()))
        );
        assert!("Home".parse::<NavSection>().is_err());
    }

    #[test]
    fn valid_section_scrolls_and_selects() {
        let viewport = FakeViewport::with_all_sections();
        let mut state = UiState::default();
        state.apply(UiEvent::MenuToggled);

        let event = scroll_to_section(&viewport, "projects").expect("projects exists");
        state.apply(event);

        assert_eq!(state.active_section(), NavSection::Projects);
        assert!(!state.is_menu_open());
        assert_eq!(viewport.scrolled_to(), vec![NavSection::Projects]);
    }

    #[test]
    fn unknown_section_changes_nothing() {
        let viewport = FakeViewport::with_all_sections();
        let mut state = UiState::default();
        state.apply(UiEvent::MenuToggled);

        let res = scroll_to_section(&viewport, "resume");

        assert_eq!(res, Err(NavError::UnknownSection("resume".to_string())));
        assert_eq!(state.active_section(), NavSection::Home);
        assert!(state.is_menu_open());
        assert!(viewport.scrolled_to().is_empty());
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let viewport = FakeViewport::default();
        let res = scroll_to_section(&viewport, "about");
        assert_eq!(res, Err(NavError::MissingAnchor(NavSection::About)));
        assert!(viewport.scrolled_to().is_empty());
    }

    #[test]
    fn scroll_to_top_leaves_section_alone() {
        let viewport = FakeViewport::with_all_sections();
        let mut state = UiState::default();
        state.apply(UiEvent::SectionSelected(NavSection::Contact));

        scroll_to_top(&viewport);

        assert_eq!(viewport.top_requests(), 1);
        assert_eq!(state.active_section(), NavSection::Contact);
    }
}
