//! Configuration loading and management for the booking engine.
//!
//! This module loads the business's pricing and availability settings from
//! YAML files so they can be passed explicitly into every calculation.
//!
//! # Example
//!
//! ```no_run
//! use trailer_booking_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded pricing for: {}", config.business().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, MAX_QUOTE_VALIDITY_DAYS};
pub use types::{AvailabilityPolicy, BookingConfig, BusinessMetadata, PricingConfig};
