use ratatui::crossterm::event::KeyEvent;
use textdiff_viewer::DiffAction;

/// Actions represent all possible state changes in the application.
/// Actions are prefixed by scope to indicate which part of the app they affect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw key press, translated by the keyboard middleware
    GlobalKeyPressed(KeyEvent),
    /// Bracketed paste from the terminal
    GlobalPaste(String),
    GlobalQuit,

    /// Forwarded to the text diff widget state
    TextDiff(DiffAction),
}
