//! Cart State
//!
//! Products come from a static catalog; the cart only ever holds clones of
//! them paired with a quantity.

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Unit price in the smallest currency unit
    pub price: u64,
    /// Display handle (an emoji in the sample catalog)
    pub image: String,
}

impl Product {
    pub fn new(id: u32, name: &str, price: u64, image: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            image: image.to_string(),
        }
    }
}

/// The static product catalog shown on the shop screen
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", 1_200_000, "💻"),
        Product::new(2, "Mouse", 30_000, "🖱️"),
        Product::new(3, "Keyboard", 80_000, "⌨️"),
    ]
}

/// A product in the cart
///
/// `quantity` is at least 1 while the item is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// quantity × unit price
    pub fn subtotal(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Visibility of the cart panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartPanel {
    Open,
    #[default]
    Closed,
}

impl CartPanel {
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// Cart state
///
/// Items are keyed by `product.id` (unique) and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub panel: CartPanel,
}

impl CartState {
    pub fn is_open(&self) -> bool {
        self.panel == CartPanel::Open
    }

    pub fn item(&self, product_id: u32) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    /// Number of distinct products in the cart
    pub fn distinct_items(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of quantity × price over all items
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derived_values_on_empty_cart() {
        let cart = CartState::default();
        assert!(!cart.is_open());
        assert_eq!(cart.distinct_items(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn test_derived_values() {
        let catalog = sample_catalog();
        let cart = CartState {
            items: vec![
                CartItem {
                    product: catalog[0].clone(),
                    quantity: 1,
                },
                CartItem {
                    product: catalog[1].clone(),
                    quantity: 3,
                },
            ],
            panel: CartPanel::Open,
        };

        assert!(cart.is_open());
        assert_eq!(cart.distinct_items(), 2);
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.total_price(), 1_200_000 + 3 * 30_000);
        assert_eq!(cart.item(2).map(|i| i.quantity), Some(3));
        assert!(cart.item(3).is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = sample_catalog();
        let ids: HashSet<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }
}
