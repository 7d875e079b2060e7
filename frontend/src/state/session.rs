//! In-memory session state and its mutation entry points.
//!
//! Network-backed operations are split in two: a `begin_*` call that checks
//! preconditions and issues a [`RequestTicket`], and a `finish_*` call that
//! applies the response. A response whose ticket is no longer the latest
//! for its channel is dropped, so a slow stale reply never overwrites the
//! result of a newer request.

use std::collections::BTreeMap;

use super::notifications::Notice;
use crate::{AppError, AppResult, ExportStatus, Marketplace, NotificationKind, SkuImages, Variant, VARIANT_CATEGORY};

// =============================================================================
// Request tickets
// =============================================================================

/// Identifies one in-flight request on a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Generation counter for one kind of request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestChannel {
    latest: u64,
}

impl RequestChannel {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

// =============================================================================
// Session
// =============================================================================

/// Everything the page knows beyond the raw form values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub variants: Vec<Variant>,
    pub variant_section_visible: bool,
    pub variants_list_visible: bool,
    /// Filenames shown in the gallery.
    pub images: Vec<String>,
    /// SKU whose folder the gallery currently shows.
    pub image_sku: Option<String>,
    /// Inline message under the SKU field.
    pub sku_error: Option<String>,
    export_status: BTreeMap<Marketplace, ExportStatus>,
    sku_channel: RequestChannel,
    variant_channel: RequestChannel,
}

impl Session {
    // --- SKU lookup ---------------------------------------------------------

    /// Returns `None` for an empty SKU; nothing is sent in that case.
    pub fn begin_sku_lookup(&mut self, sku: &str) -> Option<RequestTicket> {
        if sku.trim().is_empty() {
            return None;
        }
        Some(self.sku_channel.issue())
    }

    pub fn finish_sku_lookup(
        &mut self,
        ticket: RequestTicket,
        sku: &str,
        result: AppResult<SkuImages>,
    ) -> Option<Notice> {
        if !self.sku_channel.is_current(ticket) {
            log::debug!("Discarding stale SKU lookup for {}", sku);
            return None;
        }

        match result {
            Ok(found) => {
                log::info!("✅ SKU {} has {} images", sku, found.image_count);
                self.sku_error = None;
                self.images = found.images;
                self.image_sku = Some(sku.to_string());
                Some(Notice::new(
                    NotificationKind::Success,
                    "SKU Valid",
                    format!("Found {} images for SKU: {}", found.image_count, sku),
                ))
            }
            Err(AppError::Rejected(message)) => {
                log::warn!("SKU {} rejected: {}", sku, message);
                self.sku_error = Some(message.clone());
                Some(Notice::new(NotificationKind::Error, "SKU Invalid", message))
            }
            Err(e) => {
                log::error!("❌ Error validating SKU {}: {}", sku, e);
                Some(Notice::new(
                    NotificationKind::Error,
                    "Validation Error",
                    "Failed to validate SKU",
                ))
            }
        }
    }

    // --- Variants -----------------------------------------------------------

    /// Check the preconditions for variant generation.
    ///
    /// Failing fast yields the notice to show instead of a ticket.
    pub fn begin_variant_generation(
        &mut self,
        sku: &str,
        product_type: &str,
    ) -> Result<RequestTicket, Notice> {
        if sku.trim().is_empty() {
            return Err(Notice::new(
                NotificationKind::Error,
                "Missing SKU",
                "Please enter a SKU first",
            ));
        }
        if product_type != VARIANT_CATEGORY {
            return Err(Notice::new(
                NotificationKind::Info,
                "Not Applicable",
                "Variant generation is only for bangles",
            ));
        }
        Ok(self.variant_channel.issue())
    }

    pub fn finish_variant_generation(
        &mut self,
        ticket: RequestTicket,
        result: AppResult<Vec<Variant>>,
    ) -> Option<Notice> {
        if !self.variant_channel.is_current(ticket) {
            log::debug!("Discarding stale variant generation response");
            return None;
        }

        match result {
            Ok(variants) => {
                self.variants = dedup_by_sku(variants);
                self.variants_list_visible = !self.variants.is_empty();
                Some(Notice::new(
                    NotificationKind::Success,
                    "Variants Generated",
                    format!("Created {} bangle variants", self.variants.len()),
                ))
            }
            Err(AppError::Rejected(message)) => {
                log::warn!("Variant generation refused: {}", message);
                Some(Notice::new(NotificationKind::Error, "Generation Failed", message))
            }
            Err(e) => {
                log::error!("❌ Error generating variants: {}", e);
                Some(Notice::new(
                    NotificationKind::Error,
                    "Error",
                    "Failed to generate variants",
                ))
            }
        }
    }

    /// Drop the variant with this SKU. Returns whether one was removed.
    pub fn remove_variant(&mut self, sku: &str) -> bool {
        let before = self.variants.len();
        self.variants.retain(|v| v.sku != sku);
        if self.variants.is_empty() {
            self.variants_list_visible = false;
        }
        self.variants.len() != before
    }

    /// React to the product type selector.
    ///
    /// Variants belong to the category they were generated for, so leaving
    /// the supported category clears them and orphans any pending request.
    pub fn change_product_type(&mut self, product_type: &str) -> Option<Notice> {
        if product_type == VARIANT_CATEGORY {
            self.variant_section_visible = true;
            Some(Notice::new(
                NotificationKind::Info,
                "Bangle Selected",
                "You can now generate size variants",
            ))
        } else {
            self.variant_section_visible = false;
            self.variants_list_visible = false;
            self.variants.clear();
            self.variant_channel.invalidate();
            None
        }
    }

    // --- Export status ------------------------------------------------------

    pub fn export_status(&self, marketplace: Marketplace) -> ExportStatus {
        self.export_status.get(&marketplace).copied().unwrap_or_default()
    }

    pub fn mark_export(&mut self, marketplace: Marketplace, status: ExportStatus) {
        self.export_status.insert(marketplace, status);
    }
}

/// Keep the first variant for each SKU, preserving order.
fn dedup_by_sku(variants: Vec<Variant>) -> Vec<Variant> {
    let mut seen = std::collections::HashSet::new();
    variants
        .into_iter()
        .filter(|v| seen.insert(v.sku.clone()))
        .collect()
}
