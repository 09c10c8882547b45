//! Editor session glue for `autostrut`.
//!
//! Translates the host's construction events into propagation passes, and
//! loads and saves the user settings around a session.

#[macro_use]
extern crate log;

pub mod editor;
pub mod event;
pub mod store;

pub mod prelude {
    pub use super::editor::Editor;
    pub use super::event::{ConstructionEvent, PartEvent};
    pub use super::store::SettingsStore;
}
