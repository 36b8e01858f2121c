//! Widgets for rendering the text diff.

mod diff_result;
mod text_diff_view;
mod text_input;

pub use diff_result::DiffResultWidget;
pub use text_diff_view::{FooterHint, TextDiffView};
pub use text_input::TextInputWidget;
