//! # textdiff-viewer
//!
//! A standalone, reusable text comparison widget: two editable text buffers,
//! an on-demand line diff, and a result view with collapsible unchanged
//! sections.
//!
//! ## Design Principles
//!
//! The widget does not own the texts it edits. Both buffers live in a shared
//! tool-state store that the orchestrating application injects through the
//! [`ToolStateStore`] trait. The widget only keeps what is local to it: the
//! last [`DiffResult`], the set of expanded sections, focus and cursors.
//!
//! ## Action-Based Architecture
//!
//! Like a reducer, the state never reads key events. The application maps
//! key events to [`DiffAction`] variants and dispatches them to the state,
//! which returns [`DiffEvent`]s describing what happened.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use textdiff_viewer::{DiffAction, DefaultTheme, TextDiffState, TextDiffView};
//!
//! let mut state = TextDiffState::new(DiffOptions::default());
//!
//! // `store` implements ToolStateStore
//! state.handle_action(&mut store, DiffAction::InsertStr("hello".into()));
//! let events = state.handle_action(&mut store, DiffAction::Compare);
//!
//! let theme = DefaultTheme;
//! TextDiffView::new(store.text_diff(), &theme).render_with_state(area, buf, &mut state);
//! ```

pub mod action;
pub mod diff;
mod display;
pub mod event;
pub mod model;
pub mod state;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::DiffAction;
pub use diff::{compute_text_diff, DiffAlgorithm, DiffOptions};
pub use event::{DiffEvent, TextSide};
pub use model::{DiffResult, DiffSegment, DisplayRow, ExpandedSections, SegmentKind, TextPair};
pub use state::{Pane, TextDiffState};
pub use traits::{DefaultTheme, ThemeProvider, ToolStateStore};
pub use widget::{DiffResultWidget, FooterHint, TextDiffView, TextInputWidget};
