//! Cart line bookkeeping.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s, at most one per product.
//! Every operation consumes the cart and returns the updated one:
//!
//! ```
//! use rust_decimal::Decimal;
//! use shopcart_core::{Cart, Price, Product, ProductId};
//!
//! let mug = Product {
//!     id: ProductId::new(1),
//!     title: "Mug".to_string(),
//!     price: Price::new(Decimal::new(25, 1)).unwrap(),
//!     image: "https://example.com/mug.png".to_string(),
//!     description: String::new(),
//!     category: String::new(),
//! };
//!
//! let cart = Cart::default().add(&mug).add(&mug);
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_price().to_string(), "$5.00");
//!
//! let cart = cart.decrease(mug.id).decrease(mug.id);
//! assert!(cart.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// A product copied into the cart with a quantity.
///
/// Quantity is the only field that changes after the line is created, and
/// a line is never kept at quantity zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: String,
    quantity: u32,
}

impl CartLine {
    /// Number of units of this product in the cart.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }
}

/// Ordered collection of cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add one unit of `product`.
    ///
    /// Bumps the existing line's quantity if the product is already in the
    /// cart, otherwise appends a new line with quantity 1.
    #[must_use]
    pub fn add(mut self, product: &Product) -> Self {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::from(product));
        }
        self
    }

    /// Drop the line for `id`. No-op if the product is not in the cart.
    #[must_use]
    pub fn remove(mut self, id: ProductId) -> Self {
        self.lines.retain(|line| line.id != id);
        self
    }

    /// Add one unit to an existing line. No-op if the product is not in the cart.
    #[must_use]
    pub fn increase(mut self, id: ProductId) -> Self {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        }
        self
    }

    /// Take one unit off a line, removing the line when it reaches zero.
    #[must_use]
    pub fn decrease(mut self, id: ProductId) -> Self {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_sub(1);
        }
        self.lines.retain(|line| line.quantity > 0);
        self
    }

    /// An empty cart, whatever was in this one.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::default()
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity))
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if the product is in the cart.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }
}
