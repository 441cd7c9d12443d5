//! Shop screen actions
//!
//! Cursor-relative actions that the shop reducer resolves into cart actions.

/// Actions for the Shop screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    NextProduct,
    PreviousProduct,
    NextItem,
    PreviousItem,
    /// Add the product under the cursor to the cart
    AddSelected,
    /// Increase the quantity of the cart item under the cursor
    IncrementSelected,
    /// Decrease the quantity of the cart item under the cursor (removes at 0)
    DecrementSelected,
    /// Remove the cart item under the cursor
    RemoveSelected,
}
