//! Business logic services for admin.
//!
//! # Services
//!
//! - `settings` - Store settings reads with the launch-default fallback

pub mod settings;

pub use settings::SettingsService;
