//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. The store drains the channel after every dispatch, so
//! follow-up actions run through the full chain before the next event is read.
//!
//! This enables patterns like:
//! - GlobalKeyPressed(F5) is translated into TextDiff(Compare)
//! - TextDiff(Compare) flows through logging and reaches the reducer

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    ///
    /// The action will re-enter the middleware chain from the beginning,
    /// ensuring all middleware can observe and react to it.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
