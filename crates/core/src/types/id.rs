//! Product identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Numeric id the catalog API assigns to a product.
///
/// Cart lines are keyed by it, and cart forms post it back as `product_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_is_transparent_in_json() {
        let id: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(id, ProductId::new(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
        assert_eq!(ProductId::new(3).as_i32(), 3);
    }
}
