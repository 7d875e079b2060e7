//! UI components for the listing page.
//!
//! # Layout Components
//! - [`Header`] - Title bar with completion badge
//! - [`Footer`] - Page footer
//! - [`FormSection`] - Collapsible form region
//!
//! # Feature Components
//! - [`NotificationArea`] - Stacked toasts
//! - [`TextField`], [`TextAreaField`], [`SelectField`] - Bound form controls
//! - [`SkuField`], [`ImageGallery`] - SKU lookup and its images
//! - [`VariantPanel`] - Bangle size variants
//! - [`ExportPanel`] - Validate, save and marketplace export
//! - [`ProgressBar`] - Required-field completion

mod export;
mod fields;
mod footer;
mod header;
mod notifications;
mod progress;
mod section;
mod sku_lookup;
mod variants;

pub use export::*;
pub use fields::*;
pub use footer::*;
pub use header::*;
pub use notifications::*;
pub use progress::*;
pub use section::*;
pub use sku_lookup::*;
pub use variants::*;
