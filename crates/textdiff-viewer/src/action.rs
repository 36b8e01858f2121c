//! Text Diff Actions
//!
//! Tagged actions that the widget state can process. The orchestrating
//! application transforms key events into these actions and dispatches them.

use crate::state::Pane;

/// Actions that can be performed on the text diff widget.
///
/// These are the semantic actions the widget understands. The orchestrating
/// application is responsible for mapping key events to these actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffAction {
    // === Focus ===
    /// Focus the next pane (Original -> Modified -> Result)
    FocusNext,
    /// Focus the previous pane
    FocusPrev,
    /// Focus a specific pane
    Focus(Pane),

    // === Editing (focused input) ===
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a string at the cursor (paste)
    InsertStr(String),
    /// Insert a line break
    Newline,
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Clear the whole focused text
    ClearText,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move cursor to start of line
    CursorHome,
    /// Move cursor to end of line
    CursorEnd,

    // === Comparison ===
    /// Compare the two texts
    Compare,

    // === Sections ===
    /// Expand or collapse a section by id
    ToggleSection(String),
    /// Expand or collapse the section under the result cursor
    ToggleSectionAtCursor,
    /// Expand every section of the current result
    ExpandAll,
    /// Collapse every section
    CollapseAll,

    // === Result navigation ===
    /// Move result cursor down one row (next line in a focused input)
    CursorDown,
    /// Move result cursor up one row (previous line in a focused input)
    CursorUp,
    /// Move to first row
    CursorFirst,
    /// Move to last row
    CursorLast,
    /// Scroll down full page
    ScrollPageDown,
    /// Scroll up full page
    ScrollPageUp,

    // === General ===
    /// Close the widget
    Close,

    // === Viewport ===
    /// Set the result viewport dimensions (for scroll calculations)
    SetViewport { width: u16, height: u16 },
}

impl DiffAction {
    /// Check if this action edits or moves within a text input
    pub fn is_edit_action(&self) -> bool {
        matches!(
            self,
            DiffAction::InsertChar(_)
                | DiffAction::InsertStr(_)
                | DiffAction::Newline
                | DiffAction::Backspace
                | DiffAction::Delete
                | DiffAction::ClearText
                | DiffAction::CursorLeft
                | DiffAction::CursorRight
                | DiffAction::CursorHome
                | DiffAction::CursorEnd
        )
    }

    /// Check if this action navigates the result
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            DiffAction::CursorDown
                | DiffAction::CursorUp
                | DiffAction::CursorFirst
                | DiffAction::CursorLast
                | DiffAction::ScrollPageDown
                | DiffAction::ScrollPageUp
        )
    }
}
