//! Catalog product records.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as served by the catalog API.
///
/// Only `id`, `title`, `price` and `image` are required. The catalog also
/// sends `description` and `category`, which default to empty when absent.
/// Any other fields in the payload (ratings, etc.) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}
