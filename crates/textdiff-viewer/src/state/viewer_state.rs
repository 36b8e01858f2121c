//! Main state for the text diff widget.

use super::{NavigationState, Pane, TextCursor};
use crate::action::DiffAction;
use crate::diff::{compute_text_diff, DiffOptions};
use crate::event::{DiffEvent, TextSide};
use crate::model::{DiffResult, DisplayRow, ExpandedSections};
use crate::traits::ToolStateStore;

/// Main state for the text diff widget.
///
/// Holds everything local to the widget. The texts themselves live in the
/// [`ToolStateStore`] passed to each call.
#[derive(Debug, Clone)]
pub struct TextDiffState {
    /// Result of the last comparison.
    pub result: DiffResult,
    /// Sections expanded in the current result.
    pub expanded: ExpandedSections,
    /// Options used for the next comparison.
    pub options: DiffOptions,
    /// Focused pane.
    pub focus: Pane,
    /// Cursor/scroll within the result.
    pub nav: NavigationState,
    /// Cursor in text1.
    pub original_cursor: TextCursor,
    /// Cursor in text2.
    pub modified_cursor: TextCursor,
    /// Result viewport height (for scroll calculations)
    pub viewport_height: usize,

    /// Cached display rows (invalidated on compare and toggle).
    cached_rows: Option<Vec<DisplayRow>>,
}

impl Default for TextDiffState {
    fn default() -> Self {
        Self::new(DiffOptions::default())
    }
}

impl TextDiffState {
    /// Create a new widget state with no result.
    pub fn new(options: DiffOptions) -> Self {
        Self {
            result: DiffResult::default(),
            expanded: ExpandedSections::new(),
            options,
            focus: Pane::default(),
            nav: NavigationState::new(),
            original_cursor: TextCursor::default(),
            modified_cursor: TextCursor::default(),
            viewport_height: 20, // Default, will be updated on render
            cached_rows: None,
        }
    }

    /// Whether there is a result to show.
    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    // === Cache accessors ===

    /// Get display rows for the current result (cached).
    pub fn display_rows(&mut self) -> &[DisplayRow] {
        if self.cached_rows.is_none() {
            self.cached_rows = Some(self.result.display_rows(&self.expanded));
        }
        self.cached_rows.as_deref().unwrap_or_default()
    }

    /// Number of display rows (uses cache).
    pub fn row_count(&mut self) -> usize {
        self.display_rows().len()
    }

    fn invalidate_rows(&mut self) {
        self.cached_rows = None;
    }

    // === Operations ===

    /// Replace text1 in the store, keeping text2.
    pub fn edit_text1<S>(&mut self, store: &mut S, value: String) -> DiffEvent
    where
        S: ToolStateStore + ?Sized,
    {
        let text2 = store.text_diff().text2.clone();
        let len = value.len();
        store.set_text_diff(value, text2);
        DiffEvent::TextChanged {
            side: TextSide::Original,
            len,
        }
    }

    /// Replace text2 in the store, keeping text1.
    pub fn edit_text2<S>(&mut self, store: &mut S, value: String) -> DiffEvent
    where
        S: ToolStateStore + ?Sized,
    {
        let text1 = store.text_diff().text1.clone();
        let len = value.len();
        store.set_text_diff(text1, value);
        DiffEvent::TextChanged {
            side: TextSide::Modified,
            len,
        }
    }

    /// Compare the store's texts, replacing the result and collapsing every section.
    pub fn compare<S>(&mut self, store: &S) -> DiffEvent
    where
        S: ToolStateStore + ?Sized,
    {
        let pair = store.text_diff();
        self.result = compute_text_diff(&pair.text1, &pair.text2, &self.options);
        self.expanded.clear();
        self.nav = NavigationState::new();
        self.invalidate_rows();

        log::debug!(
            "Compare: {} changes in {} segments",
            self.result.change_count(),
            self.result.segments.len()
        );

        DiffEvent::Compared {
            segments: self.result.segments.len(),
            additions: self.result.additions(),
            deletions: self.result.deletions(),
        }
    }

    /// Flip a section between expanded and collapsed.
    ///
    /// Ids that are not a collapsible section of the current result are
    /// ignored, so the expanded set never refers to stale sections.
    pub fn toggle_section(&mut self, id: &str) -> Option<DiffEvent> {
        if !self.result.is_section(id) {
            log::debug!("Ignoring toggle of unknown section {}", id);
            return None;
        }

        let expanded = self.expanded.toggle(id);
        self.invalidate_rows();
        self.clamp_cursor();
        Some(DiffEvent::SectionToggled {
            id: id.to_string(),
            expanded,
        })
    }

    /// Expand every section of the current result.
    pub fn expand_all(&mut self) {
        self.expanded = self.result.section_ids().collect();
        self.invalidate_rows();
    }

    /// Collapse every section.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.invalidate_rows();
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let rows = self.row_count();
        self.nav.clamp(rows, self.viewport_height);
    }

    /// Section id owning the row under the result cursor, if collapsible.
    pub fn section_at_cursor(&mut self) -> Option<String> {
        let cursor = self.nav.cursor_row;
        let segment = self.display_rows().get(cursor)?.segment();
        if self.result.is_collapsible(segment) {
            self.result.segments.get(segment).map(|s| s.id.clone())
        } else {
            None
        }
    }

    /// Handle an action, returning any resulting events.
    ///
    /// This is the main entry point for processing user actions. The
    /// orchestrating application maps key events to DiffAction variants.
    pub fn handle_action<S>(&mut self, store: &mut S, action: DiffAction) -> Vec<DiffEvent>
    where
        S: ToolStateStore + ?Sized,
    {
        let mut events = Vec::new();

        if action.is_edit_action() {
            if let Some(event) = self.handle_edit_action(store, &action) {
                events.push(event);
            }
            return events;
        }

        if action.is_navigation() {
            if self.focus == Pane::Result {
                self.handle_navigation(&action);
            } else {
                // Up/Down move between lines of the focused input
                self.handle_edit_action(store, &action);
            }
            return events;
        }

        let event = match action {
            DiffAction::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            DiffAction::FocusPrev => {
                self.focus = self.focus.prev();
                None
            }
            DiffAction::Focus(pane) => {
                self.focus = pane;
                None
            }
            DiffAction::Compare => Some(self.compare(&*store)),
            DiffAction::ToggleSection(id) => self.toggle_section(&id),
            DiffAction::ToggleSectionAtCursor => self
                .section_at_cursor()
                .and_then(|id| self.toggle_section(&id)),
            DiffAction::ExpandAll => {
                self.expand_all();
                None
            }
            DiffAction::CollapseAll => {
                self.collapse_all();
                None
            }
            DiffAction::Close => Some(DiffEvent::Close),
            DiffAction::SetViewport { width: _, height } => {
                self.viewport_height = height as usize;
                None
            }
            // Routed above
            _ => None,
        };

        events.extend(event);
        events
    }

    /// Handle editing actions against the focused input.
    fn handle_edit_action<S>(&mut self, store: &mut S, action: &DiffAction) -> Option<DiffEvent>
    where
        S: ToolStateStore + ?Sized,
    {
        let side = match self.focus {
            Pane::Original => TextSide::Original,
            Pane::Modified => TextSide::Modified,
            Pane::Result => return None,
        };

        let new_value = {
            let pair = store.text_diff();
            let (text, cursor) = match side {
                TextSide::Original => (pair.text1.as_str(), &mut self.original_cursor),
                TextSide::Modified => (pair.text2.as_str(), &mut self.modified_cursor),
            };

            match action {
                DiffAction::InsertChar(c) => Some(cursor.insert_char(text, *c)),
                DiffAction::InsertStr(s) => Some(cursor.insert_str(text, s)),
                DiffAction::Newline => Some(cursor.insert_char(text, '\n')),
                DiffAction::Backspace => cursor.delete_before(text),
                DiffAction::Delete => cursor.delete_at(text),
                DiffAction::ClearText => {
                    cursor.position = 0;
                    (!text.is_empty()).then(String::new)
                }
                DiffAction::CursorLeft => {
                    cursor.left(text);
                    None
                }
                DiffAction::CursorRight => {
                    cursor.right(text);
                    None
                }
                DiffAction::CursorHome => {
                    cursor.home(text);
                    None
                }
                DiffAction::CursorEnd => {
                    cursor.end(text);
                    None
                }
                DiffAction::CursorUp => {
                    cursor.up(text);
                    None
                }
                DiffAction::CursorDown => {
                    cursor.down(text);
                    None
                }
                _ => None,
            }
        }?;

        Some(match side {
            TextSide::Original => self.edit_text1(store, new_value),
            TextSide::Modified => self.edit_text2(store, new_value),
        })
    }

    /// Handle cursor and scroll actions in the result pane.
    fn handle_navigation(&mut self, action: &DiffAction) {
        let rows = self.row_count();
        let height = self.viewport_height;

        match action {
            DiffAction::CursorDown => {
                self.nav.cursor_down(rows);
                self.nav.ensure_cursor_visible(height);
            }
            DiffAction::CursorUp => {
                self.nav.cursor_up();
                self.nav.ensure_cursor_visible(height);
            }
            DiffAction::CursorFirst => self.nav.cursor_first(),
            DiffAction::CursorLast => {
                self.nav.cursor_last(rows);
                self.nav.ensure_cursor_visible(height);
            }
            DiffAction::ScrollPageDown => self.nav.scroll_page_down(height, rows),
            DiffAction::ScrollPageUp => self.nav.scroll_page_up(height),
            _ => {}
        }
    }
}
