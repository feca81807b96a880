//! Integration tests for browsing and ordering through the storefront.
//!
//! These tests require:
//! - A running `PostgreSQL` database with all migrations applied and seed data
//!   (pizza-box migrate all && pizza-box seed)
//! - The admin server running (cargo run -p pizza-box-admin)
//! - The storefront server running (cargo run -p pizza-box-storefront)
//!
//! Run with: cargo test -p pizza-box-integration-tests -- --ignored

use reqwest::StatusCode;

use pizza_box_core::MenuItem;
use pizza_box_integration_tests::{admin_base_url, browser_client, storefront_base_url};

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn health_endpoints_respond() {
    let client = browser_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach the health endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read response"), "ok");

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to reach the readiness endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront and admin servers"]
async fn the_home_page_renders() {
    let client = browser_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to reach the home page");

    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Menu"));
}

#[tokio::test]
#[ignore = "Requires running storefront and admin servers"]
async fn add_to_cart_then_see_it_in_the_cart() {
    let client = browser_client();
    let base_url = storefront_base_url();

    // Pick a real item straight from the admin API
    let items: Vec<MenuItem> = client
        .get(format!("{}/admin/menu", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach the menu endpoint")
        .json()
        .await
        .expect("Menu did not match the shared type");
    let item = items.first().expect("Seed the menu before running this test");

    // The client follows the 303 back to the cart page
    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[
            ("item_id", item.id.to_string()),
            ("quantity", "2".to_owned()),
        ])
        .send()
        .await
        .expect("Failed to add to cart");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains(&item.name));

    // Clearing empties it again
    let resp = client
        .post(format!("{base_url}/cart/clear"))
        .send()
        .await
        .expect("Failed to clear the cart");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and admin servers"]
async fn continuing_as_guest_sticks_to_the_session() {
    let client = browser_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/guest"))
        .send()
        .await
        .expect("Failed to continue as guest");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("guest"));
}

#[tokio::test]
#[ignore = "Requires running storefront and admin servers"]
async fn a_saved_address_shows_up_on_the_cart_page() {
    let client = browser_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/address"))
        .form(&[
            ("location", "Indiranagar, Bengaluru"),
            ("house", "42"),
            ("type", "work"),
        ])
        .send()
        .await
        .expect("Failed to save the address");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Indiranagar, Bengaluru"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn unknown_paths_get_the_branded_404() {
    let client = browser_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/no-such-page"))
        .send()
        .await
        .expect("Failed to reach the storefront");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("not on the menu"));
}
