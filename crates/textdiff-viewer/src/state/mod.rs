//! State management for the text diff widget.

mod navigation;
mod text_cursor;
mod viewer_state;

pub use navigation::{NavigationState, Pane};
pub use text_cursor::TextCursor;
pub use viewer_state::TextDiffState;
