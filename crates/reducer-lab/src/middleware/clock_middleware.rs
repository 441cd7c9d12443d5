//! Session Clock Middleware
//!
//! Owns the fixed-period ticker behind the uptime counter. The ticker lives
//! from `GlobalAction::Start` until `GlobalAction::Quit`.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::ticker::Ticker;
use std::time::Duration;

/// Middleware owning the session clock ticker
pub struct ClockMiddleware {
    interval: Duration,
    ticker: Option<Ticker>,
}

impl ClockMiddleware {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ticker: None,
        }
    }
}

impl Middleware for ClockMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Start) if self.ticker.is_none() => {
                match Ticker::spawn("session-clock", self.interval, dispatcher.clone(), || {
                    Action::Global(GlobalAction::SecondElapsed)
                }) {
                    Ok(ticker) => self.ticker = Some(ticker),
                    Err(e) => log::error!("ClockMiddleware: failed to start ticker: {}", e),
                }
            }
            Action::Global(GlobalAction::Quit) => {
                // Dropping joins the ticker thread
                self.ticker = None;
            }
            _ => {}
        }

        true
    }
}
