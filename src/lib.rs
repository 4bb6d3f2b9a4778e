#[cfg(feature = "csr")]
pub mod app;
pub mod content;
pub mod navigation;
pub mod rain;
pub mod reveal;
pub mod startup;
pub mod state;
pub mod viewport;
