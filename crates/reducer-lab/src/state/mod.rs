//! Application state
//!
//! `AppState` is the single snapshot owned by the store. Each screen reads
//! its own slice; only reducers produce new snapshots.

mod cart;
mod remote_list;
mod shop;
mod stopwatch;

pub use cart::{CartItem, CartState, Product};
#[cfg(test)]
pub use cart::{sample_catalog, CartPanel};
pub use remote_list::{LoadStatus, RemoteList};
pub use shop::ShopState;
pub use stopwatch::{StopwatchMode, StopwatchState};

use crate::theme::Theme;
use crate::views::{ShopView, View};
use lab_client::{Movie, User};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// The screen currently mounted
    pub active_view: Box<dyn View>,
    pub shop: ShopState,
    pub stopwatch: StopwatchState,
    pub movies: RemoteList<Movie>,
    pub users: RemoteList<User>,
    /// Seconds counted by the session clock
    pub uptime_secs: u64,
    /// Suffix appended to formatted prices
    pub currency_suffix: String,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            active_view: Box::new(ShopView::new()),
            shop: ShopState::default(),
            stopwatch: StopwatchState::default(),
            movies: RemoteList::default(),
            users: RemoteList::default(),
            uptime_secs: 0,
            currency_suffix: "원".to_string(),
            theme: Theme::default(),
        }
    }
}

impl AppState {
    pub fn with_currency_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.currency_suffix = suffix.into();
        self
    }
}
