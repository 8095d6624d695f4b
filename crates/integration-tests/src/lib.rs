//! Integration test helpers for shopcart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopcart-integration-tests
//! ```
//!
//! No external services are needed. Storefront tests drive the router
//! in-process with `tower::ServiceExt::oneshot`; catalog client tests start
//! a throwaway axum server on a random local port.
//!
//! # Test Categories
//!
//! - `storefront_cart` - Product grid, reveal-more, cart operations
//! - `storefront_coffee` - Add-coffee form and list
//! - `catalog_client` - Catalog fetch and background loading

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use rust_decimal::Decimal;
use shopcart_core::{Price, Product, ProductId};
use shopcart_storefront::{
    catalog::Catalog, config::StorefrontConfig, routes, state::AppState,
};
use tower::ServiceExt;

/// Build a catalog product with a price given as a decimal string.
pub fn product(id: i32, title: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Price::new(price.parse::<Decimal>().unwrap()).unwrap(),
        image: format!("https://example.com/images/{id}.png"),
        description: format!("Description of {title}"),
        category: "electronics".to_string(),
    }
}

/// `count` products with ids `1..=count`, all priced $1.00.
pub fn products(count: i32) -> Vec<Product> {
    (1..=count)
        .map(|id| product(id, &format!("Item #{id:02}"), "1.00"))
        .collect()
}

/// Build the storefront router around `catalog` with default configuration.
pub fn app(catalog: Catalog) -> Router {
    routes::app(AppState::new(StorefrontConfig::default(), catalog))
}

/// A rendered response with its body collected.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// A single visitor: sends requests to the app and keeps its session cookie.
pub struct Visitor {
    app: Router,
    cookie: Option<String>,
}

impl Visitor {
    pub fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// A visitor whose catalog has already loaded `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self::new(app(Catalog::ready(products)))
    }

    /// Another visitor of the same app, with no session yet.
    pub fn stranger(&self) -> Self {
        Self::new(self.app.clone())
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        if let Some(pair) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}
