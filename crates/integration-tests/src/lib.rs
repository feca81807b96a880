//! Integration tests for The Pizza Box.
//!
//! The tests drive live servers over HTTP, so they are `#[ignore]`d by
//! default and skipped in a plain `cargo test`.
//!
//! # Running Tests
//!
//! ```bash
//! # 1. Start PostgreSQL, then apply migrations and seed data
//! cargo run -p pizza-box-cli -- migrate all
//! cargo run -p pizza-box-cli -- seed
//!
//! # 2. Start both servers
//! cargo run -p pizza-box-admin &
//! cargo run -p pizza-box-storefront &
//!
//! # 3. Run the ignored tests
//! cargo test -p pizza-box-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `admin_settings` - Settings and menu endpoint contracts
//! - `storefront_flows` - Browsing and cart flows through the storefront

/// Base URL for the admin API (override with `ADMIN_BASE_URL`).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Base URL for the storefront (override with `STOREFRONT_BASE_URL`).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client with a cookie store, like the browser session it stands in for.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn browser_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
