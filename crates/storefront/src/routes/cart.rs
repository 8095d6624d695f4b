//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Each handler loads it, applies
//! one `shopcart_core::Cart` transformation, stores the result, and
//! redirects back to the product page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use shopcart_core::{Cart, CartLine, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::{self, session_keys};
use crate::state::AppState;

/// Acknowledgment shown when the visitor presses "Buy now".
pub const BUY_NOW_NOTICE: &str = "Proceeding to checkout";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            total: cart.total_price().to_string(),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.as_i32(),
            title: line.title.clone(),
            image: line.image.clone(),
            quantity: line.quantity(),
            price: line.price.to_string(),
            line_price: line.line_total().to_string(),
        }
    }
}

/// Form data naming a single product.
#[derive(Debug, Deserialize)]
pub struct CartProductForm {
    pub product_id: ProductId,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the visitor's cart (empty if they have none).
pub async fn load_cart(session: &Session) -> Result<Cart> {
    models::load(session, session_keys::CART).await
}

/// Apply `change` to the visitor's cart and store the result.
async fn update_cart<F>(session: &Session, change: F) -> Result<Cart>
where
    F: FnOnce(Cart) -> Cart + Send,
{
    let cart = change(load_cart(session).await?);
    models::store(session, session_keys::CART, &cart).await?;
    Ok(cart)
}

// =============================================================================
// Handlers
// =============================================================================

/// Add one unit of a catalog product.
///
/// The form only carries the product id, so the product is looked up in
/// the catalog first.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CartProductForm>,
) -> Result<Redirect> {
    let catalog = state.catalog();
    if !catalog.is_ready() {
        return Err(AppError::CatalogUnavailable);
    }
    let product = catalog
        .find(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let cart = update_cart(&session, |cart| cart.add(&product)).await?;

    let product_id = form.product_id.to_string();
    add_breadcrumb("cart", "Added product", Some(&[("product_id", product_id.as_str())]));
    tracing::info!(
        product_id = %form.product_id,
        items = cart.item_count(),
        "Added product to cart"
    );

    Ok(Redirect::to("/"))
}

/// Remove a product's line entirely.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<CartProductForm>) -> Result<Redirect> {
    update_cart(&session, |cart| cart.remove(form.product_id)).await?;
    Ok(Redirect::to("/"))
}

/// Add one unit to a line already in the cart.
#[instrument(skip(session))]
pub async fn increase(session: Session, Form(form): Form<CartProductForm>) -> Result<Redirect> {
    update_cart(&session, |cart| cart.increase(form.product_id)).await?;
    Ok(Redirect::to("/"))
}

/// Take one unit off a line, dropping it at zero.
#[instrument(skip(session))]
pub async fn decrease(session: Session, Form(form): Form<CartProductForm>) -> Result<Redirect> {
    update_cart(&session, |cart| cart.decrease(form.product_id)).await?;
    Ok(Redirect::to("/"))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Redirect> {
    update_cart(&session, Cart::clear).await?;
    add_breadcrumb("cart", "Cleared cart", None);
    Ok(Redirect::to("/"))
}

/// Acknowledge a purchase request.
///
/// Leaves the cart untouched and talks to no payment service; the notice is
/// shown once on the next page render.
#[instrument(skip(session))]
pub async fn buy(session: Session) -> Result<Redirect> {
    models::store(&session, session_keys::FLASH, &BUY_NOW_NOTICE).await?;
    tracing::info!("Buy now acknowledged");
    Ok(Redirect::to("/"))
}

/// Get cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}
