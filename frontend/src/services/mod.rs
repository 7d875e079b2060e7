//! Backend services.
//!
//! # Services
//!
//! - [`api`] - SKU lookup, variant generation and marketplace export calls

pub mod api;

pub use api::*;
