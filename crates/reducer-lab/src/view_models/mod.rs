//! View models
//!
//! Pre-computed presentation data. Views render these; all formatting
//! decisions live here so they can be tested without a terminal.

pub mod remote_list_view_model;
pub mod shop_view_model;
pub mod stopwatch_view_model;

pub use remote_list_view_model::RemoteListViewModel;
pub use shop_view_model::{CartPanelViewModel, ShopViewModel};
pub use stopwatch_view_model::StopwatchViewModel;

/// One rendered line of a selectable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub text: String,
    /// Whether this row is under the cursor
    pub is_cursor: bool,
}
