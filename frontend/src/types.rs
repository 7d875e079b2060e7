//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Catalog Types** - Variants and marketplaces
//! - **Notification Types** - Toast severity
//! - **API Types** - Backend request/response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Catalog Types
// =============================================================================

/// A size-specific sub-SKU generated for a bangle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Display size, e.g. `2.4"`
    pub size: String,
    /// Variant SKU, unique within a variant list
    pub sku: String,
}

/// Marketplaces the listing can be exported to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marketplace {
    Meesho,
    Myntra,
    Flipkart,
}

impl Marketplace {
    /// All marketplaces, in button order.
    pub const ALL: [Marketplace; 3] = [Marketplace::Meesho, Marketplace::Myntra, Marketplace::Flipkart];

    /// Backend route that performs the export.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Marketplace::Meesho => "/export_meesho",
            Marketplace::Myntra => "/export_myntra",
            Marketplace::Flipkart => "/export_flipkart",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Marketplace::Meesho => "Meesho",
            Marketplace::Myntra => "Myntra",
            Marketplace::Flipkart => "Flipkart",
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Export progress shown on a marketplace status card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportStatus {
    #[default]
    Ready,
    Pending,
    Completed,
    Failed,
}

impl ExportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExportStatus::Ready => "Ready",
            ExportStatus::Pending => "Pending",
            ExportStatus::Completed => "Completed",
            ExportStatus::Failed => "Failed",
        }
    }

    /// Get CSS class for the status indicator.
    pub fn css_class(&self) -> &'static str {
        match self {
            ExportStatus::Ready => "status-indicator status-ready",
            ExportStatus::Pending => "status-indicator status-pending",
            ExportStatus::Completed => "status-indicator status-success",
            ExportStatus::Failed => "status-indicator status-error",
        }
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast success",
            NotificationKind::Error => "toast error",
            NotificationKind::Info => "toast info",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Info => "🔔",
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Body of `POST /api/validate-sku`.
#[derive(Clone, Debug, Serialize)]
pub struct SkuLookupRequest {
    pub sku: String,
}

/// Response of `POST /api/validate-sku`.
#[derive(Clone, Debug, Deserialize)]
pub struct SkuLookupResponse {
    pub valid: bool,
    #[serde(default)]
    pub image_count: usize,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Images discovered for a valid SKU.
#[derive(Clone, Debug, PartialEq)]
pub struct SkuImages {
    pub image_count: usize,
    pub images: Vec<String>,
}

impl SkuLookupResponse {
    /// Split the wire response into found images or a backend rejection.
    pub fn into_result(self) -> AppResult<SkuImages> {
        if self.valid {
            Ok(SkuImages {
                image_count: self.image_count,
                images: self.images,
            })
        } else {
            Err(AppError::Rejected(
                self.message.unwrap_or_else(|| "SKU not found".to_string()),
            ))
        }
    }
}

/// Body of `POST /api/generate-variants`.
#[derive(Clone, Debug, Serialize)]
pub struct VariantRequest {
    pub sku: String,
    pub product_type: String,
}

/// Response of `POST /api/generate-variants`.
#[derive(Clone, Debug, Deserialize)]
pub struct VariantResponse {
    pub success: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub message: Option<String>,
}

impl VariantResponse {
    pub fn into_result(self) -> AppResult<Vec<Variant>> {
        if self.success {
            Ok(self.variants)
        } else {
            Err(AppError::Rejected(
                self.message.unwrap_or_else(|| "Variant generation failed".to_string()),
            ))
        }
    }
}

/// Response of every `POST /export_<marketplace>` route.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExportResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ExportResponse {
    /// Success iff `status == "success"`, for every marketplace.
    ///
    /// The accepted value is the backend confirmation message, if any.
    pub fn into_result(self) -> AppResult<Option<String>> {
        if self.status.as_deref() == Some("success") {
            Ok(self.message)
        } else {
            Err(AppError::Rejected(
                self.message.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Request could not be sent or completed.
    Network(String),
    /// Response body was not the expected JSON.
    Decode(String),
    /// Backend declared a business failure; message is shown verbatim.
    Rejected(String),
    /// Local input rules failed.
    Validation(Vec<String>),
}

impl AppError {
    /// Transport-level failures, as opposed to backend or input errors.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Decode(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            AppError::Rejected(msg) => write!(f, "{}", msg),
            AppError::Validation(errors) => write!(f, "{}", errors.join(", ")),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_lookup_response_deserialization() {
        let json = r#"{"valid": true, "image_count": 2, "images": ["a.jpg", "b.jpg"]}"#;
        let response: SkuLookupResponse = serde_json::from_str(json).unwrap();
        let found = response.into_result().unwrap();
        assert_eq!(found.image_count, 2);
        assert_eq!(found.images, vec!["a.jpg", "b.jpg"]);

        let json = r#"{"valid": false, "message": "No image folder found for SKU: X"}"#;
        let response: SkuLookupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_result(),
            Err(AppError::Rejected("No image folder found for SKU: X".to_string()))
        );
    }

    #[test]
    fn test_variant_response_ignores_extra_fields() {
        let json = r#"{
            "success": true,
            "variants": [
                {"sku": "B1-24", "size": "2.4\"", "original_sku": "B1"},
                {"sku": "B1-26", "size": "2.6\"", "original_sku": "B1"}
            ]
        }"#;
        let response: VariantResponse = serde_json::from_str(json).unwrap();
        let variants = response.into_result().unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].sku, "B1-24");
        assert_eq!(variants[1].size, "2.6\"");
    }

    #[test]
    fn test_export_response_requires_success_status() {
        let ok: ExportResponse =
            serde_json::from_str(r#"{"status": "success", "message": "Product R1 submitted"}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(Some("Product R1 submitted".to_string())));

        let rejected: ExportResponse =
            serde_json::from_str(r#"{"status": "error", "message": "SKU not provided."}"#).unwrap();
        assert_eq!(
            rejected.into_result(),
            Err(AppError::Rejected("SKU not provided.".to_string()))
        );

        // A bare message without status is not a success.
        let bare: ExportResponse = serde_json::from_str(r#"{"message": "Exported"}"#).unwrap();
        assert!(bare.into_result().is_err());
    }

    #[test]
    fn test_error_classification() {
        assert!(AppError::Network("offline".into()).is_transport());
        assert!(AppError::Decode("eof".into()).is_transport());
        assert!(!AppError::Rejected("nope".into()).is_transport());
        assert_eq!(
            AppError::Validation(vec!["a".into(), "b".into()]).to_string(),
            "a, b"
        );
    }

    #[test]
    fn test_marketplace_endpoints() {
        let endpoints: Vec<_> = Marketplace::ALL.iter().map(|m| m.endpoint()).collect();
        assert_eq!(endpoints, vec!["/export_meesho", "/export_myntra", "/export_flipkart"]);
    }
}
