//! Trait for the shared store that owns the compared texts.

use crate::model::TextPair;

/// Shared tool-state store holding the two texts.
///
/// The widget never owns the texts; every edit goes through
/// [`set_text_diff`](ToolStateStore::set_text_diff) with both values, so the
/// store stays the single source of truth. Implement this on whatever state
/// container the application keeps alive for its session.
///
/// # Example
///
/// ```ignore
/// #[derive(Default)]
/// struct ToolState {
///     text_diff: TextPair,
/// }
///
/// impl ToolStateStore for ToolState {
///     fn text_diff(&self) -> &TextPair {
///         &self.text_diff
///     }
///
///     fn set_text_diff(&mut self, text1: String, text2: String) {
///         self.text_diff = TextPair { text1, text2 };
///     }
/// }
/// ```
pub trait ToolStateStore {
    /// Current pair of texts.
    fn text_diff(&self) -> &TextPair;

    /// Replace both texts.
    fn set_text_diff(&mut self, text1: String, text2: String);
}
