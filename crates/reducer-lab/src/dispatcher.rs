//! Dispatcher for enqueueing actions
//!
//! Middleware, tickers and fetch tasks hold a Dispatcher clone. Actions sent
//! through it are queued on the store's channel and processed by the store,
//! on the main thread, through the full middleware chain.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions to the store
///
/// Cheap to clone and safe to move into background threads.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Enqueue an action for the store
    ///
    /// The action re-enters the middleware chain from the beginning.
    /// A closed channel means the store is gone; the action is dropped.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
