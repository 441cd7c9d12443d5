//! Frame Ticker Middleware
//!
//! Drives the stopwatch: while it is running and its view is mounted, a
//! ticker dispatches `UpdateTime` once per frame. The ticker is dropped as
//! soon as either condition stops holding.

use crate::actions::{Action, StopwatchAction};
use crate::clock::Clock;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::ticker::Ticker;
use crate::views::ViewId;
use std::sync::Arc;
use std::time::Duration;

/// Middleware owning the stopwatch frame ticker
pub struct FrameTickerMiddleware {
    clock: Arc<dyn Clock>,
    frame_interval: Duration,
    ticker: Option<Ticker>,
}

impl FrameTickerMiddleware {
    pub fn new(clock: Arc<dyn Clock>, frame_interval: Duration) -> Self {
        Self {
            clock,
            frame_interval,
            ticker: None,
        }
    }

    fn should_tick(state: &AppState) -> bool {
        state.running
            && state.stopwatch.is_running()
            && state.active_view.view_id() == ViewId::Stopwatch
    }

    fn start(&mut self, dispatcher: &Dispatcher) {
        let clock = Arc::clone(&self.clock);
        let spawned = Ticker::spawn(
            "stopwatch-frame",
            self.frame_interval,
            dispatcher.clone(),
            move || {
                Action::Stopwatch(StopwatchAction::UpdateTime {
                    now_ms: clock.now_ms(),
                })
            },
        );

        // On failure the next reduce retries
        match spawned {
            Ok(ticker) => self.ticker = Some(ticker),
            Err(e) => log::error!("FrameTickerMiddleware: failed to start ticker: {}", e),
        }
    }

    fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            log::debug!("Releasing ticker {}", ticker.name());
            drop(ticker);
        }
    }
}

impl Middleware for FrameTickerMiddleware {
    fn handle(&mut self, _action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        true
    }

    fn after_reduce(&mut self, _action: &Action, state: &AppState, dispatcher: &Dispatcher) {
        match (Self::should_tick(state), self.ticker.is_some()) {
            (true, false) => self.start(dispatcher),
            (false, true) => self.stop(),
            _ => {}
        }
    }
}
