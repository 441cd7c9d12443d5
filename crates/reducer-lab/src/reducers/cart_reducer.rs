//! Cart Reducer

use crate::actions::CartAction;
use crate::state::{CartItem, CartState};

/// Reducer for cart state.
///
/// Accepts only CartAction. Pure and total: no action is rejected and
/// unknown product ids leave the cart unchanged.
pub fn reduce_cart(mut state: CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::Add(product) => {
            if let Some(item) = state
                .items
                .iter_mut()
                .find(|item| item.product.id == product.id)
            {
                item.quantity = item.quantity.saturating_add(1);
            } else {
                state.items.push(CartItem {
                    product: product.clone(),
                    quantity: 1,
                });
            }
        }
        CartAction::Remove { product_id } => {
            state.items.retain(|item| item.product.id != *product_id);
        }
        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if state.item(*product_id).is_none() {
                log::trace!("Cart: no item for product {}", product_id);
                return state;
            }
            // Quantities ≤ 0 drop the item; the rest are clamped into u32
            let clamped = u32::try_from((*quantity).max(0)).unwrap_or(u32::MAX);
            for item in state
                .items
                .iter_mut()
                .filter(|item| item.product.id == *product_id)
            {
                item.quantity = clamped;
            }
            state.items.retain(|item| item.quantity > 0);
        }
        CartAction::Clear => {
            state.items.clear();
        }
        CartAction::ToggleCart => {
            state.panel = state.panel.toggled();
        }
    }
    state
}
