//! Client-side state of the listing page.
//!
//! - [`form`] - Live form values, aggregation and validation
//! - [`progress`] - Completion of the required fields
//! - [`session`] - Images, variants and export status, with request tickets
//! - [`notifications`] - Toast stack
//! - [`sections`] - Collapsed/expanded form regions

pub mod form;
pub mod notifications;
pub mod progress;
pub mod sections;
pub mod session;

pub use form::*;
pub use notifications::*;
pub use progress::*;
pub use sections::*;
pub use session::*;
