//! KeyboardMiddleware - translates keyboard events into focus-aware actions
//!
//! Key handling has two layers:
//!
//! ## Layer 1: Global keys
//! Keys that work regardless of focus (Ctrl+C, Esc, Tab, F5).
//!
//! ## Layer 2: Focused pane
//! Text inputs take characters and editing keys, the result pane takes
//! vim-style navigation and section toggles.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use textdiff_viewer::{DiffAction, Pane};

/// KeyboardMiddleware handles keyboard and paste input
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let focus = state.text_diff.focus;

        match action {
            Action::GlobalKeyPressed(key) => {
                match map_key(*key, focus) {
                    Some(mapped) => dispatcher.dispatch(mapped),
                    None => log::trace!("Unbound key {:?} in {:?}", key.code, focus),
                }
                false
            }
            Action::GlobalPaste(text) => {
                if focus.is_input() {
                    dispatcher.dispatch(Action::TextDiff(DiffAction::InsertStr(
                        normalize_newlines(text),
                    )));
                }
                false
            }
            _ => true,
        }
    }
}

/// Terminals deliver pasted line breaks as `\r` or `\r\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Map a key press to an action for the focused pane
pub fn map_key(key: KeyEvent, focus: Pane) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let diff = |action| Some(Action::TextDiff(action));

    // Layer 1: global keys
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Some(Action::GlobalQuit),
        KeyCode::Char('r') if ctrl => return diff(DiffAction::Compare),
        KeyCode::F(5) => return diff(DiffAction::Compare),
        KeyCode::Esc => return diff(DiffAction::Close),
        KeyCode::Tab => return diff(DiffAction::FocusNext),
        KeyCode::BackTab => return diff(DiffAction::FocusPrev),
        _ => {}
    }

    // Layer 2: focused pane
    if focus.is_input() {
        return match key.code {
            KeyCode::Char('u') if ctrl => diff(DiffAction::ClearText),
            KeyCode::Char(c) if !ctrl && !alt => diff(DiffAction::InsertChar(c)),
            KeyCode::Enter => diff(DiffAction::Newline),
            KeyCode::Backspace => diff(DiffAction::Backspace),
            KeyCode::Delete => diff(DiffAction::Delete),
            KeyCode::Left => diff(DiffAction::CursorLeft),
            KeyCode::Right => diff(DiffAction::CursorRight),
            KeyCode::Up => diff(DiffAction::CursorUp),
            KeyCode::Down => diff(DiffAction::CursorDown),
            KeyCode::Home => diff(DiffAction::CursorHome),
            KeyCode::End => diff(DiffAction::CursorEnd),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => diff(DiffAction::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => diff(DiffAction::CursorUp),
        KeyCode::Char('g') | KeyCode::Home => diff(DiffAction::CursorFirst),
        KeyCode::Char('G') | KeyCode::End => diff(DiffAction::CursorLast),
        KeyCode::PageDown => diff(DiffAction::ScrollPageDown),
        KeyCode::PageUp => diff(DiffAction::ScrollPageUp),
        KeyCode::Enter | KeyCode::Char(' ') => diff(DiffAction::ToggleSectionAtCursor),
        KeyCode::Char('e') => diff(DiffAction::ExpandAll),
        KeyCode::Char('z') => diff(DiffAction::CollapseAll),
        KeyCode::Char('c') => diff(DiffAction::Compare),
        KeyCode::Char('q') => Some(Action::GlobalQuit),
        _ => None,
    }
}
