//! Shop Reducer
//!
//! Resolves cursor-relative shop actions into cart actions and keeps both
//! cursors inside their lists.

use crate::actions::{CartAction, ShopAction};
use crate::reducers::cart_reducer::reduce_cart;
use crate::state::ShopState;

/// Reducer for the shop screen (cursor-relative actions)
pub fn reduce_shop(mut state: ShopState, action: &ShopAction) -> ShopState {
    let cart_action = match action {
        ShopAction::NextProduct => {
            if state.product_cursor + 1 < state.catalog.len() {
                state.product_cursor += 1;
            }
            None
        }
        ShopAction::PreviousProduct => {
            state.product_cursor = state.product_cursor.saturating_sub(1);
            None
        }
        ShopAction::NextItem => {
            if state.item_cursor + 1 < state.cart.items.len() {
                state.item_cursor += 1;
            }
            None
        }
        ShopAction::PreviousItem => {
            state.item_cursor = state.item_cursor.saturating_sub(1);
            None
        }
        ShopAction::AddSelected => state.selected_product().cloned().map(CartAction::Add),
        ShopAction::IncrementSelected => selected_quantity_update(&state, 1),
        ShopAction::DecrementSelected => selected_quantity_update(&state, -1),
        ShopAction::RemoveSelected => state
            .selected_item_id()
            .map(|product_id| CartAction::Remove { product_id }),
    };

    if let Some(cart_action) = cart_action {
        state = reduce_cart_slice(state, &cart_action);
    }

    state
}

/// Apply a cart action to the shop's cart and re-clamp the item cursor
pub fn reduce_cart_slice(mut state: ShopState, action: &CartAction) -> ShopState {
    state.cart = reduce_cart(state.cart, action);
    state.item_cursor = state
        .item_cursor
        .min(state.cart.items.len().saturating_sub(1));
    state
}

fn selected_quantity_update(state: &ShopState, delta: i64) -> Option<CartAction> {
    let item = state.cart.items.get(state.item_cursor)?;
    Some(CartAction::UpdateQuantity {
        product_id: item.product.id,
        quantity: i64::from(item.quantity) + delta,
    })
}
