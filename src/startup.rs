//! Timing and progress rules for the splash screen shown before the page.

/// Milliseconds between progress bar ticks.
pub const TICK_INTERVAL_MS: u64 = 150;
/// Percentage points added per tick.
pub const PROGRESS_STEP: u8 = 10;
/// Pause between a full bar and the page appearing.
pub const FINISH_DELAY_MS: u64 = 500;

pub const COMPLETE: u8 = 100;

/// Splash screen progress, saturating at [`COMPLETE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LoadingProgress(u8);

impl LoadingProgress {
    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= COMPLETE
    }

    pub fn advance(self) -> Self {
        Self(self.0.saturating_add(PROGRESS_STEP).min(COMPLETE))
    }
}

/// Ticks needed to fill the bar from empty.
pub fn ticks_to_complete() -> u64 {
    u64::from(COMPLETE.div_ceil(PROGRESS_STEP))
}

/// Earliest time, from mount, at which the page replaces the splash screen.
pub fn reveal_time_ms() -> u64 {
    ticks_to_complete() * TICK_INTERVAL_MS + FINISH_DELAY_MS
}
