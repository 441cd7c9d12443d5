//! Shop Screen State

use super::cart::{sample_catalog, CartState, Product};

/// Shop screen state: the catalog, the cart and the two list cursors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopState {
    pub catalog: Vec<Product>,
    pub cart: CartState,
    /// Cursor in the product list
    pub product_cursor: usize,
    /// Cursor in the cart panel
    pub item_cursor: usize,
}

impl Default for ShopState {
    fn default() -> Self {
        Self {
            catalog: sample_catalog(),
            cart: CartState::default(),
            product_cursor: 0,
            item_cursor: 0,
        }
    }
}

impl ShopState {
    pub fn selected_product(&self) -> Option<&Product> {
        self.catalog.get(self.product_cursor)
    }

    /// Product id of the cart item under the cursor
    pub fn selected_item_id(&self) -> Option<u32> {
        self.cart
            .items
            .get(self.item_cursor)
            .map(|item| item.product.id)
    }
}
