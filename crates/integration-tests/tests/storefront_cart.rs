//! Integration tests for the product grid and the cart.

use axum::http::StatusCode;
use shopcart_integration_tests::{Visitor, product, products};
use shopcart_storefront::catalog::Catalog;

fn card_count(body: &str) -> usize {
    body.matches("class=\"product-card\"").count()
}

// =============================================================================
// Product Grid
// =============================================================================

#[tokio::test]
async fn test_first_six_products_shown() {
    let mut visitor = Visitor::with_products(products(10));

    let page = visitor.get("/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(card_count(&page.body), 6);
    assert!(page.body.contains("Item #06"));
    assert!(!page.body.contains("Item #07"));
    assert!(page.body.contains("Load more"));
}

#[tokio::test]
async fn test_reveal_more_clamps_to_catalog() {
    let mut visitor = Visitor::with_products(products(10));

    let redirect = visitor.post("/products/more", "").await;
    assert_eq!(redirect.status, StatusCode::SEE_OTHER);
    assert_eq!(redirect.location(), Some("/"));

    let page = visitor.get("/").await;
    assert_eq!(card_count(&page.body), 10);
    assert!(page.body.contains("Item #10"));
    assert!(!page.body.contains("Load more"));

    // Further reveals keep showing everything
    visitor.post("/products/more", "").await;
    let page = visitor.get("/").await;
    assert_eq!(card_count(&page.body), 10);
}

#[tokio::test]
async fn test_small_catalog_has_no_load_more() {
    let mut visitor = Visitor::with_products(products(4));

    let page = visitor.get("/").await;
    assert_eq!(card_count(&page.body), 4);
    assert!(!page.body.contains("Load more"));
}

#[tokio::test]
async fn test_loading_catalog_page() {
    let mut visitor = Visitor::new(shopcart_integration_tests::app(Catalog::new()));

    let page = visitor.get("/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Loading products..."));
    assert!(page.body.contains("http-equiv=\"refresh\""));

    let add = visitor.post("/cart/add", "product_id=1").await;
    assert_eq!(add.status, StatusCode::SERVICE_UNAVAILABLE);

    let ready = visitor.get("/health/ready").await;
    assert_eq!(ready.status, StatusCode::SERVICE_UNAVAILABLE);
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn test_add_merges_same_product() {
    let mut visitor = Visitor::with_products(products(3));

    let added = visitor.post("/cart/add", "product_id=2").await;
    assert_eq!(added.status, StatusCode::SEE_OTHER);
    assert_eq!(added.location(), Some("/"));
    visitor.post("/cart/add", "product_id=2").await;

    let page = visitor.get("/").await;
    assert_eq!(page.body.matches("class=\"cart-line\"").count(), 1);
    assert!(page.body.contains("Total: <strong>$2.00</strong>"));

    let count = visitor.get("/cart/count").await;
    assert_eq!(count.status, StatusCode::OK);
    assert!(count.body.contains(">2<"));
}

#[tokio::test]
async fn test_quantity_controls_and_total() {
    let mut visitor = Visitor::with_products(vec![
        product(1, "Mug", "2.50"),
        product(2, "Kettle", "5.00"),
    ]);

    visitor.post("/cart/add", "product_id=1").await;
    visitor.post("/cart/add", "product_id=2").await;
    visitor.post("/cart/increase", "product_id=1").await;

    let page = visitor.get("/").await;
    assert!(page.body.contains("Total: <strong>$10.00</strong>"));

    visitor.post("/cart/decrease", "product_id=1").await;
    let page = visitor.get("/").await;
    assert!(page.body.contains("Total: <strong>$7.50</strong>"));

    visitor.post("/cart/remove", "product_id=2").await;
    let page = visitor.get("/").await;
    assert!(page.body.contains("Total: <strong>$2.50</strong>"));

    // Decreasing the last unit drops the line
    visitor.post("/cart/decrease", "product_id=1").await;
    let page = visitor.get("/").await;
    assert!(page.body.contains("Your cart is empty."));
    assert!(!page.body.contains("Buy now"));
    assert!(!page.body.contains("Clear cart"));
}

#[tokio::test]
async fn test_unknown_ids() {
    let mut visitor = Visitor::with_products(products(3));

    let add = visitor.post("/cart/add", "product_id=99").await;
    assert_eq!(add.status, StatusCode::NOT_FOUND);

    // Lines that are not in the cart are left alone
    visitor.post("/cart/add", "product_id=1").await;
    for action in ["/cart/increase", "/cart/decrease", "/cart/remove"] {
        let response = visitor.post(action, "product_id=3").await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
    }

    let page = visitor.get("/").await;
    assert!(page.body.contains("Total: <strong>$1.00</strong>"));
}

#[tokio::test]
async fn test_malformed_product_id_rejected() {
    let mut visitor = Visitor::with_products(products(3));

    let response = visitor.post("/cart/add", "product_id=abc").await;
    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_clear_empties_cart() {
    let mut visitor = Visitor::with_products(products(3));
    visitor.post("/cart/add", "product_id=1").await;
    visitor.post("/cart/add", "product_id=3").await;

    let cleared = visitor.post("/cart/clear", "").await;
    assert_eq!(cleared.status, StatusCode::SEE_OTHER);

    let page = visitor.get("/").await;
    assert!(page.body.contains("Your cart is empty."));

    let count = visitor.get("/cart/count").await;
    assert!(count.body.contains(">0<"));
}

#[tokio::test]
async fn test_buy_now_notice_shown_once() {
    let mut visitor = Visitor::with_products(products(3));
    visitor.post("/cart/add", "product_id=1").await;

    let page = visitor.get("/").await;
    assert!(page.body.contains("Buy now"));
    assert!(page.body.contains("Clear cart"));

    let bought = visitor.post("/cart/buy", "").await;
    assert_eq!(bought.status, StatusCode::SEE_OTHER);

    let page = visitor.get("/").await;
    assert!(page.body.contains("Proceeding to checkout"));
    // Cart is untouched
    assert!(page.body.contains("Total: <strong>$1.00</strong>"));

    let page = visitor.get("/").await;
    assert!(!page.body.contains("Proceeding to checkout"));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let mut alice = Visitor::with_products(products(3));
    let mut bob = alice.stranger();

    alice.post("/cart/add", "product_id=1").await;

    let page = bob.get("/").await;
    assert!(page.body.contains("Your cart is empty."));

    let page = alice.get("/").await;
    assert!(!page.body.contains("Your cart is empty."));
}

// =============================================================================
// Health and Headers
// =============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let mut visitor = Visitor::with_products(products(1));

    let health = visitor.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body, "ok");

    let ready = visitor.get("/health/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
}

#[tokio::test]
async fn test_response_headers() {
    let mut visitor = Visitor::with_products(products(1));

    let page = visitor.get("/").await;
    assert!(page.headers.contains_key("x-request-id"));
    assert_eq!(
        page.headers.get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert!(page.headers.contains_key("content-security-policy"));
}

#[tokio::test]
async fn test_extreme_price_still_renders() {
    let mut visitor = Visitor::with_products(vec![product(
        1,
        "Gold Bar",
        "50000000000000000000000000000",
    )]);

    visitor.post("/cart/add", "product_id=1").await;
    visitor.post("/cart/increase", "product_id=1").await;

    let page = visitor.get("/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("$79228162514264337593543950335.00"));

    let count = visitor.get("/cart/count").await;
    assert_eq!(count.status, StatusCode::OK);
    assert!(count.body.contains(">2<"));
}
