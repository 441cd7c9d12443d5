//! Actions module
//!
//! This module defines all actions in the application using a tagged action
//! architecture: the root enum is tagged by domain and every domain owns its
//! own action enum, reduced by its own sub-reducer.

pub mod cart;
pub mod global;
pub mod remote_list;
pub mod shop;
pub mod stopwatch;

// Re-export all action types for convenience
pub use cart::CartAction;
pub use global::GlobalAction;
pub use remote_list::{MovieListAction, UserListAction};
pub use shop::ShopAction;
pub use stopwatch::StopwatchAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Shop screen cursor actions
    Shop(ShopAction),
    /// Cart state machine actions
    Cart(CartAction),
    /// Stopwatch state machine actions
    Stopwatch(StopwatchAction),
    /// Movies screen actions
    MovieList(MovieListAction),
    /// Users screen actions
    UserList(UserListAction),
}

impl Action {
    /// High-frequency actions that would flood the log at debug level
    pub fn is_periodic(&self) -> bool {
        matches!(
            self,
            Action::Stopwatch(StopwatchAction::UpdateTime { .. })
                | Action::Global(GlobalAction::SecondElapsed)
        )
    }
}
