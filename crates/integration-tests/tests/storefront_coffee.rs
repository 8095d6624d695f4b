//! Integration tests for the add-coffee form.

use axum::http::StatusCode;
use shopcart_integration_tests::{Visitor, products};

const ESPRESSO: &str = "name=Espresso&chef=Luca&supplier=Lavazza&taste=Bitter\
    &category=Hot&details=Short+and+strong&photo=https%3A%2F%2Fexample.com%2Fespresso.jpg";

#[tokio::test]
async fn test_empty_coffee_page() {
    let mut visitor = Visitor::with_products(products(1));

    let page = visitor.get("/coffee").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Coffees (0)"));
    assert!(page.body.contains("No coffees added yet."));
    assert_eq!(page.body.matches("required").count(), 7);
}

#[tokio::test]
async fn test_add_coffee_redirects_and_lists() {
    let mut visitor = Visitor::with_products(products(1));

    let created = visitor.post("/coffee", ESPRESSO).await;
    assert_eq!(created.status, StatusCode::SEE_OTHER);
    assert_eq!(created.location(), Some("/coffee"));

    let page = visitor.get("/coffee").await;
    assert!(page.body.contains("Coffees (1)"));
    assert!(page.body.contains("Short and strong"));
    // The form comes back empty
    assert!(page.body.contains("name=\"name\" value=\"\""));
}

#[tokio::test]
async fn test_duplicate_coffees_kept() {
    let mut visitor = Visitor::with_products(products(1));

    visitor.post("/coffee", ESPRESSO).await;
    visitor.post("/coffee", ESPRESSO).await;

    let page = visitor.get("/coffee").await;
    assert!(page.body.contains("Coffees (2)"));
    assert_eq!(page.body.matches("class=\"coffee\"").count(), 2);
}

#[tokio::test]
async fn test_missing_field_rerenders_form() {
    let mut visitor = Visitor::with_products(products(1));

    let rejected = visitor
        .post(
            "/coffee",
            "name=Espresso&chef=+++&supplier=Lavazza&taste=Bitter&category=Hot&details=Short&photo=x",
        )
        .await;
    assert_eq!(rejected.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(rejected.body.contains("chef is required"));
    // Entered values are preserved
    assert!(rejected.body.contains("value=\"Espresso\""));
    assert!(rejected.body.contains("value=\"Lavazza\""));

    let page = visitor.get("/coffee").await;
    assert!(page.body.contains("Coffees (0)"));
}

#[tokio::test]
async fn test_absent_field_reported() {
    let mut visitor = Visitor::with_products(products(1));

    let rejected = visitor
        .post("/coffee", "name=Latte&chef=Ana&supplier=Illy&taste=Mild&category=Hot&details=Milky")
        .await;
    assert_eq!(rejected.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(rejected.body.contains("photo is required"));
}

#[tokio::test]
async fn test_coffee_list_independent_of_cart() {
    let mut visitor = Visitor::with_products(products(2));

    visitor.post("/cart/add", "product_id=1").await;
    visitor.post("/coffee", ESPRESSO).await;
    visitor.post("/cart/clear", "").await;

    let page = visitor.get("/coffee").await;
    assert!(page.body.contains("Coffees (1)"));
}
