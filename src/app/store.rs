use leptos::prelude::*;

use crate::state::{UiEvent, UiState};

/// Page state shared by every component through context.
#[derive(Debug, Clone, Copy)]
pub struct Store {
    state: RwSignal<UiState>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UiState::default()),
        }
    }

    pub fn dispatch(&self, event: UiEvent) {
        self.state.update(|state| state.apply(event));
    }

    /// Memoised view of one piece of state, so components only re-render when
    /// that piece changes.
    pub fn select<T>(&self, f: impl Fn(&UiState) -> T + Send + Sync + 'static) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let state = self.state;
        Memo::new(move |_| state.with(|s| f(s)))
    }

    pub fn with_untracked<T>(&self, f: impl FnOnce(&UiState) -> T) -> T {
        self.state.with_untracked(f)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}
