//! Pizza Box Admin library.
//!
//! This crate provides the admin functionality as a library,
//! allowing it to be tested and reused (the CLI drives the same
//! repositories for migrations and seeding).
//!
//! # Security
//!
//! This crate owns the restaurant database (settings and menu). It carries
//! no authentication of its own: deploy it on private-network
//! infrastructure only and let the storefront talk to it over the API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
