//! Cart actions
//!
//! The transitions of the cart state machine. Every action is total: unknown
//! product ids are silently ignored.

use crate::state::Product;

/// Actions for the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product (appends it on first add)
    Add(Product),
    /// Drop the item for a product
    Remove { product_id: u32 },
    /// Set the quantity of an item; quantities ≤ 0 remove it
    UpdateQuantity { product_id: u32, quantity: i64 },
    /// Empty the cart, keeping panel visibility
    Clear,
    /// Open or close the cart panel
    ToggleCart,
}
