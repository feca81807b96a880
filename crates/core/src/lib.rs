//! Pizza Box Core - Shared types library.
//!
//! This crate provides common types used across all Pizza Box components:
//! - `storefront` - Public-facing ordering site
//! - `admin` - Restaurant administration API and dashboard (private network)
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure state logic - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere, including in unit tests that never touch a server.
//!
//! # Modules
//!
//! - [`types`] - Domain types: cart items, users, addresses, menu items,
//!   store settings, and newtype IDs
//! - [`store`] - The per-session state container ([`store::StoreState`])

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod store;
pub mod types;

pub use store::StoreState;
pub use types::*;
