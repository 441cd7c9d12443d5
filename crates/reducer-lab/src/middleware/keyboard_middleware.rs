//! Keyboard Middleware
//!
//! Converts raw key events into semantic actions. Global keys (quit, screen
//! switching) are handled here; everything else is translated by the active
//! view. Time-dependent actions are stamped with the middleware's clock.

use crate::actions::{Action, GlobalAction};
use crate::clock::Clock;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::ViewId;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
pub struct KeyboardMiddleware {
    clock: Arc<dyn Clock>,
}

impl KeyboardMiddleware {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    fn translate(&self, key: &KeyEvent, state: &AppState) -> Option<Action> {
        let active = state.active_view.view_id();

        match key.code {
            KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => {
                Some(Action::Global(GlobalAction::Quit))
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Global(GlobalAction::Quit))
            }
            KeyCode::Tab => Some(replace_view(active.next())),
            KeyCode::BackTab => Some(replace_view(active.previous())),
            KeyCode::Char(c @ '1'..='9') if key.modifiers == KeyModifiers::NONE => {
                let index = c as usize - '1' as usize;
                ViewId::from_index(index).map(replace_view)
            }
            _ => state
                .active_view
                .translate_key(key, state, self.clock.now_ms()),
        }
    }
}

fn replace_view(id: ViewId) -> Action {
    Action::Global(GlobalAction::ReplaceView(id.into_view()))
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            match self.translate(key, state) {
                Some(translated) => dispatcher.dispatch(translated),
                None => log::trace!("Unhandled key: {:?}", key),
            }
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        // Pass all other actions through
        true
    }
}
