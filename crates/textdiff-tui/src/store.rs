use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, &action);
        }

        // Process any actions dispatched by middleware
        while let Ok(pending) = self.action_rx.try_recv() {
            self.dispatch(pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{keyboard::KeyboardMiddleware, logging::LoggingMiddleware};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use textdiff_viewer::{Pane, TextPair, ToolStateStore};

    fn store() -> Store {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        store
    }

    fn press(store: &mut Store, code: KeyCode) {
        store.dispatch(Action::GlobalKeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        )));
    }

    #[test]
    fn test_typing_and_compare() {
        let mut store = store();

        press(&mut store, KeyCode::Char('a'));
        press(&mut store, KeyCode::Tab);
        press(&mut store, KeyCode::Char('b'));
        press(&mut store, KeyCode::F(5));

        let state = store.state();
        assert_eq!(state.tool_state.text_diff(), &TextPair::new("a", "b"));
        assert!(state.text_diff.has_result());
        assert_eq!(state.text_diff.result.change_count(), 2);
    }

    #[test]
    fn test_arrow_up_edits_previous_line() {
        let mut store = store();

        store.dispatch(Action::GlobalPaste("ab\ncd".into()));
        press(&mut store, KeyCode::Up);
        press(&mut store, KeyCode::Char('X'));

        assert_eq!(store.state().tool_state.text_diff().text1, "abX\ncd");
    }

    #[test]
    fn test_paste_goes_to_focused_input() {
        let mut store = store();

        press(&mut store, KeyCode::Tab);
        store.dispatch(Action::GlobalPaste("line 1\r\nline 2".into()));

        assert_eq!(store.state().text_diff.focus, Pane::Modified);
        assert_eq!(store.state().tool_state.text_diff().text2, "line 1\nline 2");
    }

    #[test]
    fn test_toggle_from_result_pane() {
        let mut store = store();
        let original: String = (1..=10).map(|i| format!("{}\n", i)).collect();
        store.dispatch(Action::GlobalPaste(original.clone()));
        press(&mut store, KeyCode::Tab);
        store.dispatch(Action::GlobalPaste(format!("{}11\n", original)));
        press(&mut store, KeyCode::F(5));
        press(&mut store, KeyCode::Tab);
        assert_eq!(store.state().text_diff.focus, Pane::Result);

        // First row is the collapsed leading section
        press(&mut store, KeyCode::Enter);
        assert!(store.state().text_diff.expanded.contains("section-0"));

        press(&mut store, KeyCode::Char('z'));
        assert!(store.state().text_diff.expanded.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut store = store();
        store.dispatch(Action::GlobalKeyPressed(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(!store.state().running);
    }

    #[test]
    fn test_esc_closes() {
        let mut store = store();
        press(&mut store, KeyCode::Esc);
        assert!(!store.state().running);
    }
}
