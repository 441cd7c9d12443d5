//! Shop View Model
//!
//! Pre-computes the catalog rows, the cart button label and, when the cart
//! panel is open, its rows and totals.

use super::ListRow;
use crate::state::{CartItem, CartState, Product, ShopState};

/// View model for the shop screen
#[derive(Debug, Clone)]
pub struct ShopViewModel {
    /// Catalog rows ("💻 Laptop  1,200,000원")
    pub products: Vec<ListRow>,
    /// Header button label ("Cart (3)")
    pub cart_button: String,
    /// Present only while the cart panel is open
    pub cart: Option<CartPanelViewModel>,
}

/// View model for the cart overlay
#[derive(Debug, Clone)]
pub struct CartPanelViewModel {
    pub rows: Vec<ListRow>,
    pub is_empty: bool,
    /// "3 items (2 distinct)"
    pub summary_text: String,
    /// "Total: 1,230,000원"
    pub total_text: String,
}

impl ShopViewModel {
    pub fn from_state(shop: &ShopState, currency_suffix: &str) -> Self {
        let panel_open = shop.cart.is_open();

        let products = shop
            .catalog
            .iter()
            .enumerate()
            .map(|(index, product)| ListRow {
                text: product_text(product, currency_suffix),
                is_cursor: !panel_open && index == shop.product_cursor,
            })
            .collect();

        let cart = panel_open
            .then(|| CartPanelViewModel::from_cart(&shop.cart, shop.item_cursor, currency_suffix));

        Self {
            products,
            cart_button: format!("Cart ({})", shop.cart.total_quantity()),
            cart,
        }
    }
}

impl CartPanelViewModel {
    fn from_cart(cart: &CartState, cursor: usize, currency_suffix: &str) -> Self {
        let rows = cart
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| ListRow {
                text: item_text(item, currency_suffix),
                is_cursor: index == cursor,
            })
            .collect();

        Self {
            rows,
            is_empty: cart.items.is_empty(),
            summary_text: format!(
                "{} items ({} distinct)",
                cart.total_quantity(),
                cart.distinct_items()
            ),
            total_text: format!("Total: {}", format_price(cart.total_price(), currency_suffix)),
        }
    }
}

fn product_text(product: &Product, currency_suffix: &str) -> String {
    format!(
        "{} {:<10} {:>14}",
        product.image,
        product.name,
        format_price(product.price, currency_suffix)
    )
}

fn item_text(item: &CartItem, currency_suffix: &str) -> String {
    format!(
        "{} {:<10} {} x {} = {}",
        item.product.image,
        item.product.name,
        format_price(item.product.price, currency_suffix),
        item.quantity,
        format_price(item.subtotal(), currency_suffix)
    )
}

/// Format a price with thousands separators followed by the currency suffix
pub fn format_price(price: u64, currency_suffix: &str) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", grouped, currency_suffix)
}
