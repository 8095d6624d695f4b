//! Per-visitor state stored in the session.
//!
//! Each container (cart, revealed count, coffee list) is serialized under its
//! own key. Handlers load a value, apply a pure transformation from
//! `shopcart_core`, and store the result back within the same request.

use serde::{Serialize, de::DeserializeOwned};
use tower_sessions::Session;

use crate::error::Result;

/// Session keys for visitor state.
pub mod keys {
    /// Key for the visitor's cart (`shopcart_core::Cart`).
    pub const CART: &str = "cart";

    /// Key for how many catalog products are revealed.
    pub const VISIBLE_COUNT: &str = "visible_count";

    /// Key for the coffee list (`shopcart_core::CoffeeList`).
    pub const COFFEES: &str = "coffees";

    /// Key for a one-shot notice shown on the next page render.
    pub const FLASH: &str = "flash";
}

/// Load a value from the session, or its default when the visitor has none.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails or the stored
/// value cannot be deserialized.
pub async fn load<T>(session: &Session, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    Ok(session.get::<T>(key).await?.unwrap_or_default())
}

/// Store a value in the session.
///
/// # Errors
///
/// Returns `AppError::Session` if the value cannot be serialized.
pub async fn store<T>(session: &Session, key: &str, value: &T) -> Result<()>
where
    T: Serialize + Sync,
{
    session.insert(key, value).await?;
    Ok(())
}

/// Remove and return the pending flash notice, if any.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
pub async fn take_flash(session: &Session) -> Result<Option<String>> {
    Ok(session.remove::<String>(keys::FLASH).await?)
}
