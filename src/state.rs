use crate::navigation::NavSection;
use crate::rain::RainDrop;
use crate::reveal::RevealSet;
use crate::startup::LoadingProgress;
use crate::viewport;

/// Everything that can change the page state, one variant per event source.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Startup interval fired.
    LoadingTick,
    /// Startup delay elapsed. Carries the background rain so it is generated
    /// exactly once, by whoever ends the splash screen.
    LoadingFinished { rain: Vec<RainDrop> },
    Scrolled {
        offset: f64,
        probed: Option<NavSection>,
    },
    Revealed(String),
    SectionSelected(NavSection),
    MenuToggled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    is_menu_open: bool,
    active_section: NavSection,
    scroll_offset: f64,
    show_scroll_top: bool,
    is_loading: bool,
    loading_progress: LoadingProgress,
    revealed: RevealSet,
    rain_drops: Vec<RainDrop>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_menu_open: false,
            active_section: NavSection::default(),
            scroll_offset: 0.0,
            show_scroll_top: false,
            is_loading: true,
            loading_progress: LoadingProgress::default(),
            revealed: RevealSet::default(),
            rain_drops: Vec::new(),
        }
    }
}

impl UiState {
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::LoadingTick => {
                if self.is_loading {
                    self.loading_progress = self.loading_progress.advance();
                }
            }
            UiEvent::LoadingFinished { rain } => {
                // the bar has to be full first, and the splash never comes back
                if self.is_loading && self.loading_progress.is_complete() {
                    self.is_loading = false;
                    self.rain_drops = rain;
                    log::info!("loading finished, {} rain drops", self.rain_drops.len());
                }
            }
            UiEvent::Scrolled { offset, probed } => {
                self.scroll_offset = offset;
                self.show_scroll_top = viewport::shows_scroll_top(offset);
                if let Some(section) = probed {
                    self.active_section = section;
                }
            }
            UiEvent::Revealed(id) => {
                if self.revealed.contains(&id) {
                    return;
                }
                log::trace!("revealing {id}");
                self.revealed.insert(id);
            }
            UiEvent::SectionSelected(section) => {
                self.active_section = section;
                self.is_menu_open = false;
            }
            UiEvent::MenuToggled => self.is_menu_open = !self.is_menu_open,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    pub fn active_section(&self) -> NavSection {
        self.active_section
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    pub fn nav_is_compact(&self) -> bool {
        viewport::is_compact_nav(self.scroll_offset)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn loading_progress(&self) -> u8 {
        self.loading_progress.percent()
    }

    pub fn loading_complete(&self) -> bool {
        self.loading_progress.is_complete()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn revealed(&self) -> &RevealSet {
        &self.revealed
    }

    pub fn rain_drops(&self) -> &[RainDrop] {
        &self.rain_drops
    }
}
