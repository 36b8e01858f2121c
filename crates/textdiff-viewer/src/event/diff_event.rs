/// Events emitted by the text diff widget.
///
/// The widget performs no side effects beyond its own state and the injected
/// store. The parent application reacts to these events (status line,
/// logging, closing the view).
///
/// # Example
///
/// ```ignore
/// for event in state.handle_action(&mut store, action) {
///     match event {
///         DiffEvent::Compared { additions, deletions, .. } => {
///             status = format!("+{} -{}", additions, deletions);
///         }
///         DiffEvent::Close => running = false,
///         _ => {}
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEvent {
    /// One of the texts was replaced in the store.
    TextChanged {
        /// Which text changed.
        side: TextSide,
        /// New length in bytes.
        len: usize,
    },

    /// A comparison ran and its result replaced the previous one.
    Compared {
        /// Number of segments in the result.
        segments: usize,
        /// Added lines.
        additions: usize,
        /// Removed lines.
        deletions: usize,
    },

    /// A section was expanded or collapsed.
    SectionToggled {
        /// Section id.
        id: String,
        /// Whether the section is now expanded.
        expanded: bool,
    },

    /// User wants to close the widget.
    Close,
}

/// Identifies one of the two texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSide {
    /// text1, the original.
    Original,
    /// text2, the modified text.
    Modified,
}

impl TextSide {
    /// Label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            TextSide::Original => "Original Text",
            TextSide::Modified => "Modified Text",
        }
    }

    /// Placeholder shown while the input is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            TextSide::Original => "Enter original text...",
            TextSide::Modified => "Enter modified text...",
        }
    }
}
