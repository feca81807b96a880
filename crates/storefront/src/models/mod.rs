//! Domain models for storefront.
//!
//! The order-domain types (cart lines, users, addresses, settings) live
//! in `pizza-box-core`; this module only holds what is specific to the
//! storefront's own session storage.

pub mod session;

pub use session::keys as session_keys;
