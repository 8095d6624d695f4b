//! Shopcart Core - Domain types and state transitions.
//!
//! This crate provides the state containers behind the shopcart storefront:
//! - [`cart`] - Cart lines with merge-or-append and prune-on-decrease bookkeeping
//! - [`visible`] - How many catalog products are currently revealed
//! - [`coffee`] - The append-only coffee list fed by the add-coffee form
//!
//! # Architecture
//!
//! The core crate contains only types and pure transformations - no I/O, no
//! HTTP clients, no sessions. Every operation takes the old value and returns
//! the new one, so the storefront can load a container from the session,
//! transform it, and store it back.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices, plus the catalog `Product`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod coffee;
pub mod types;
pub mod visible;

pub use cart::{Cart, CartLine};
pub use coffee::{CoffeeEntry, CoffeeError, CoffeeList};
pub use types::*;
pub use visible::VisibleCount;
