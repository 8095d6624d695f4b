//! Core types for shopcart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::ProductId;
pub use price::{Price, PriceError};
pub use product::Product;
