//! Page controller.
//!
//! Owns the reactive state of the listing page and exposes one entry point
//! per user action. Components hold a copy of the controller and call into
//! it; network-backed actions are `async` and are spawned with
//! `spawn_local` by the view layer.

use leptos::*;

use crate::services::ListingApi;
use crate::state::{
    form_progress, validate_form, FormField, FormRecord, Notice, NotificationCenter, ProductForm,
    SectionId, SectionVisibility, Session,
};
use crate::{AppError, ExportStatus, Marketplace, NotificationKind};

/// Reactive state plus the backend it talks to.
///
/// Every field is an arena handle, so the controller is `Copy` and can be
/// moved into any number of event handlers.
pub struct ListingController<A: 'static> {
    api: StoredValue<A>,
    pub form: RwSignal<ProductForm>,
    pub session: RwSignal<Session>,
    pub notifications: RwSignal<NotificationCenter>,
    pub sections: RwSignal<SectionVisibility>,
}

impl<A: 'static> Clone for ListingController<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for ListingController<A> {}

impl<A: ListingApi + Clone + 'static> ListingController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: store_value(api),
            form: create_rw_signal(ProductForm::default()),
            session: create_rw_signal(Session::default()),
            notifications: create_rw_signal(NotificationCenter::default()),
            sections: create_rw_signal(SectionVisibility::default()),
        }
    }

    // =========================================================================
    // Notifications & sections
    // =========================================================================

    pub fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        self.notifications.update(|n| {
            n.notify(kind, title, message);
        });
    }

    fn post(&self, notice: Notice) {
        self.notifications.update(|n| {
            n.post(notice);
        });
    }

    pub fn toggle_section(&self, id: SectionId) {
        self.sections.update(|s| s.toggle(id));
    }

    pub fn collapse_other_sections(&self, active: SectionId) {
        self.sections.update(|s| s.collapse_others(active));
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Store a control's new value. The product type also drives the
    /// variant section.
    pub fn set_field(&self, field: FormField, value: String) {
        let product_type = (field == FormField::ProductType).then(|| value.clone());
        self.form.update(|f| f.set(field, value));
        if let Some(product_type) = product_type {
            self.change_product_type(&product_type);
        }
    }

    /// Current completion percentage of the required controls.
    pub fn progress(&self) -> u32 {
        self.form.with(form_progress)
    }

    /// Validate and report; `true` when every rule passes.
    pub fn validate_form(&self) -> bool {
        self.check_form().is_some()
    }

    /// Validate, then log the record locally.
    pub fn save_product(&self) -> bool {
        let Some(record) = self.check_form() else {
            return false;
        };
        match serde_json::to_string(&record) {
            Ok(json) => log::info!("💾 Product data: {}", json),
            Err(e) => log::warn!("Could not serialize product data: {}", e),
        }
        self.notify(
            NotificationKind::Success,
            "Product Saved",
            "Product data has been saved locally",
        );
        true
    }

    fn check_form(&self) -> Option<FormRecord> {
        let variants = self.session.with_untracked(|s| s.variants.clone());
        let result = self.form.with_untracked(|f| validate_form(f, &variants));
        match result {
            Ok(record) => {
                self.notify(
                    NotificationKind::Success,
                    "Validation Passed",
                    "All required fields are filled correctly",
                );
                Some(record)
            }
            Err(errors) => {
                log::warn!("Form validation failed: {}", AppError::Validation(errors.clone()));
                self.notify(NotificationKind::Error, "Validation Failed", &errors.join(", "));
                None
            }
        }
    }

    // =========================================================================
    // SKU lookup
    // =========================================================================

    /// Check a SKU against the backend and refresh the gallery.
    pub async fn validate_sku(&self, sku: String) {
        let Some(ticket) = self.session.try_update(|s| s.begin_sku_lookup(&sku)).flatten() else {
            return;
        };

        log::info!("🔍 Validating SKU {}", sku);
        let api = self.api.get_value();
        let result = api.validate_sku(&sku).await;

        let notice = self
            .session
            .try_update(|s| s.finish_sku_lookup(ticket, &sku, result))
            .flatten();
        if let Some(notice) = notice {
            self.post(notice);
        }
    }

    // =========================================================================
    // Variants
    // =========================================================================

    /// Request size variants for the SKU and type currently in the form.
    pub async fn generate_variants(&self) {
        let (sku, product_type) = self.form.with_untracked(|f| {
            (
                f.get(FormField::Sku).to_string(),
                f.get(FormField::ProductType).to_string(),
            )
        });

        let begun = self
            .session
            .try_update(|s| s.begin_variant_generation(&sku, &product_type));
        let ticket = match begun {
            Some(Ok(ticket)) => ticket,
            Some(Err(notice)) => {
                self.post(notice);
                return;
            }
            None => return,
        };

        log::info!("📏 Generating variants for {} ({})", sku, product_type);
        let api = self.api.get_value();
        let result = api.generate_variants(&sku, &product_type).await;

        let notice = self
            .session
            .try_update(|s| s.finish_variant_generation(ticket, result))
            .flatten();
        if let Some(notice) = notice {
            self.post(notice);
        }
    }

    pub fn remove_variant(&self, sku: &str) {
        self.session.update(|s| {
            s.remove_variant(sku);
        });
    }

    pub fn change_product_type(&self, product_type: &str) {
        let notice = self
            .session
            .try_update(|s| s.change_product_type(product_type))
            .flatten();
        if let Some(notice) = notice {
            self.post(notice);
        }
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Validate, then send the live form to one marketplace.
    ///
    /// Exports to different marketplaces are independent and may overlap.
    pub async fn export(&self, marketplace: Marketplace) {
        if !self.validate_form() {
            log::warn!("Form validation failed, cannot export to {}", marketplace);
            self.notify(
                NotificationKind::Error,
                "Validation Error",
                &format!("Please fix the errors before exporting to {}.", marketplace),
            );
            return;
        }

        let form_data = self.form.with_untracked(|f| f.to_form_data());
        self.session
            .update(|s| s.mark_export(marketplace, ExportStatus::Pending));
        log::info!("📤 Exporting to {}...", marketplace);

        let api = self.api.get_value();
        match api.export(marketplace, &form_data).await {
            Ok(message) => {
                log::info!("✅ {} export succeeded", marketplace);
                self.session
                    .update(|s| s.mark_export(marketplace, ExportStatus::Completed));
                let message =
                    message.unwrap_or_else(|| format!("{} export succeeded!", marketplace));
                self.notify(
                    NotificationKind::Success,
                    &format!("{} Export", marketplace),
                    &message,
                );
            }
            Err(AppError::Rejected(message)) => {
                log::error!("❌ {} export failed: {}", marketplace, message);
                self.session
                    .update(|s| s.mark_export(marketplace, ExportStatus::Failed));
                self.notify(
                    NotificationKind::Error,
                    &format!("{} Export Failed", marketplace),
                    &format!("{} export failed: {}", marketplace, message),
                );
            }
            Err(e) => {
                log::error!("❌ {} export network error: {}", marketplace, e);
                self.session
                    .update(|s| s.mark_export(marketplace, ExportStatus::Failed));
                self.notify(
                    NotificationKind::Error,
                    "Network Error",
                    &format!("Could not reach the {} exporter. {}", marketplace, e),
                );
            }
        }
    }
}
