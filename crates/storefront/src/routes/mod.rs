//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Product grid (revealed prefix) and cart panel
//! GET  /health             - Liveness check
//! GET  /health/ready       - Readiness (catalog loaded)
//!
//! # Products
//! POST /products/more      - Reveal the next batch of products
//!
//! # Cart (post/redirect/get back to /)
//! POST /cart/add           - Add one unit of a product
//! POST /cart/remove        - Remove a product's line
//! POST /cart/increase      - Increment a line
//! POST /cart/decrease      - Decrement a line (drops it at zero)
//! POST /cart/clear         - Empty the cart
//! POST /cart/buy           - Checkout acknowledgment (no payment)
//! GET  /cart/count         - Cart count badge (fragment)
//!
//! # Coffee
//! GET  /coffee             - Add-coffee form and list
//! POST /coffee             - Append a coffee
//! ```

pub mod cart;
pub mod coffee;
pub mod health;
pub mod products;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/clear", post(cart::clear))
        .route("/buy", post(cart::buy))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/products/more", post(products::more))
        .nest("/cart", cart_routes())
        .route("/coffee", get(coffee::show).post(coffee::create))
}

/// Build the full application: routes, static files, and middleware.
///
/// Sentry layers are not included; the binary adds them outermost.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_files = ServeDir::new(&state.config().static_dir);

    Router::new()
        .merge(routes())
        .nest_service("/static", static_files)
        .layer(session_layer)
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}
