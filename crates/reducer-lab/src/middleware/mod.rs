use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod clock_middleware;
pub mod fetch_middleware;
pub mod frame_ticker_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware is where side effects live: key translation, timers and
/// network fetches. Reducers stay pure.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;

    /// Observe the state produced by the reducer for `action`
    ///
    /// Used to acquire or release resources whose lifetime follows the state.
    fn after_reduce(&mut self, _action: &Action, _state: &AppState, _dispatcher: &Dispatcher) {}
}
