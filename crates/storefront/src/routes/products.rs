//! Product listing route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use shopcart_core::{Product, VisibleCount};
use tower_sessions::Session;
use tracing::instrument;

use super::cart::{CartView, load_cart};
use crate::catalog::CatalogState;
use crate::error::Result;
use crate::filters;
use crate::models::{self, session_keys};
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub title: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub description: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            title: product.title.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}

/// Product listing page template, with the cart panel alongside.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub total_products: usize,
    pub has_more: bool,
    pub cart: CartView,
    pub flash: Option<String>,
}

/// Shown while the startup catalog fetch is in flight.
#[derive(Template, WebTemplate)]
#[template(path = "products/loading.html")]
pub struct CatalogLoadingTemplate;

/// Shown when the startup catalog fetch failed.
#[derive(Template, WebTemplate)]
#[template(path = "products/unavailable.html")]
pub struct CatalogUnavailableTemplate;

/// Display the revealed part of the catalog and the visitor's cart.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Response> {
    let products = match state.catalog().state() {
        CatalogState::Ready(products) => products,
        CatalogState::Loading => return Ok(CatalogLoadingTemplate.into_response()),
        CatalogState::Failed(reason) => {
            tracing::warn!(%reason, "Serving product page without a catalog");
            return Ok((StatusCode::SERVICE_UNAVAILABLE, CatalogUnavailableTemplate).into_response());
        }
    };

    let visible: VisibleCount = models::load(&session, session_keys::VISIBLE_COUNT).await?;
    let cart = load_cart(&session).await?;
    let flash = models::take_flash(&session).await?;

    Ok(ProductsIndexTemplate {
        products: visible
            .visible(&*products)
            .iter()
            .map(ProductView::from)
            .collect(),
        total_products: products.len(),
        has_more: visible.has_more(products.len()),
        cart: CartView::from(&cart),
        flash,
    }
    .into_response())
}

/// Reveal the next batch of products.
#[instrument(skip(session))]
pub async fn more(session: Session) -> Result<Redirect> {
    let visible: VisibleCount = models::load(&session, session_keys::VISIBLE_COUNT).await?;
    let visible = visible.reveal_more();
    models::store(&session, session_keys::VISIBLE_COUNT, &visible).await?;

    tracing::debug!(visible = visible.get(), "Revealed more products");
    Ok(Redirect::to("/"))
}
