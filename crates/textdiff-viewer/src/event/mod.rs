//! Events emitted by the widget for the parent application to handle.

mod diff_event;

pub use diff_event::{DiffEvent, TextSide};
