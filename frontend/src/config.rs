//! Application configuration.
//!
//! Centralized constants for the listing frontend. The page is served by
//! the same backend that answers the API calls, so URLs are relative by
//! default.

/// Backend API base URL.
///
/// Empty means same origin as the page.
pub const BACKEND_URL: &str = "";

/// Public path under which per-SKU image folders are served.
///
/// Thumbnails resolve to `IMAGE_ROOT/<sku>/<filename>`.
pub const IMAGE_ROOT: &str = "/static/images";

/// How long a notification stays on screen before fading (ms).
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 4000;

/// Length of the fade-out transition before a notification is removed (ms).
pub const NOTIFICATION_FADE_MS: u32 = 300;

/// The only product category that supports size variants.
pub const VARIANT_CATEGORY: &str = "bangle";

/// Product categories offered in the type selector.
pub const PRODUCT_TYPES: &[&str] = &["necklace", "bangle", "chain", "earring", "ring", "bracelet"];

/// Base materials offered in the material selector.
pub const MATERIALS: &[&str] = &["gold", "silver", "brass", "alloy", "copper", "stainless_steel"];

/// GST slabs (percent) accepted by the marketplaces.
pub const GST_RATES: &[u32] = &[3, 5, 12, 18];
