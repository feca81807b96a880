//! Pizza Box Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! The storefront owns no restaurant data. Settings and the menu come
//! from the admin service over its JSON API; the only local state is the
//! per-visitor session (cart, identity, delivery address).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
