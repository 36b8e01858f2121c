use crate::actions::Action;
use crate::state::AppState;
use textdiff_viewer::DiffEvent;

/// Reducer - produces new state from current state + action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::GlobalQuit => {
            state.running = false;
        }
        Action::TextDiff(diff_action) => {
            let events = state
                .text_diff
                .handle_action(&mut state.tool_state, diff_action.clone());

            for event in events {
                log::debug!("Event: {:?}", event);
                if event == DiffEvent::Close {
                    // Single view: closing the widget ends the app
                    state.running = false;
                }
            }
        }
        // Translated by middleware
        Action::GlobalKeyPressed(_) | Action::GlobalPaste(_) => {}
    }

    state
}
