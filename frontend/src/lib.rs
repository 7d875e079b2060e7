//! Listing Desk - Frontend Rust/Leptos Application
//!
//! A WebAssembly form for preparing one jewelry product listing and
//! exporting it to Meesho, Myntra and Flipkart.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotificationArea (toasts)                                   │
//! │  Header (completion badge + progress bar)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProductForm                                                 │
//! │  ├── Basic / Pricing / Attributes sections                  │
//! │  ├── Images (SKU lookup gallery)                            │
//! │  ├── Variants (bangles only)                                │
//! │  └── Export (validate, save, marketplace cards)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Variant, Marketplace, API payloads, errors)
//! - [`state`] - Form, session, notifications and section state
//! - [`controller`] - One entry point per user action
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Catalog
    Variant, Marketplace, ExportStatus,
    // Notifications
    NotificationKind,
    // API
    SkuLookupRequest, SkuLookupResponse, SkuImages,
    VariantRequest, VariantResponse, ExportResponse,
    // Errors
    AppError, AppResult,
};

// Controller
pub use controller::ListingController;

// Components
pub use components::*;

// Services
pub use services::*;

/// Controller wired to the real backend.
pub type PageController = ListingController<HttpListingApi>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Listing Desk - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Multi-Platform Product Listing"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let ctrl: PageController = ListingController::new(HttpListingApi::default());
    let variants_hidden = Signal::derive(move || {
        !ctrl.session.with(|s| s.variant_section_visible)
    });

    log::info!("✅ Multi-Platform Product Listing Form Initialized");

    view! {
        <NotificationArea ctrl=ctrl/>
        <Header ctrl=ctrl/>

        <div class="container">
            <form id="productForm" on:submit=|ev| ev.prevent_default()>
                <FormSection ctrl=ctrl id=state::SectionId::Basic>
                    <TextField ctrl=ctrl field=state::FormField::ProductName placeholder="e.g. Gold Plated Bangle"/>
                    <SkuField ctrl=ctrl/>
                    <SelectField
                        ctrl=ctrl
                        field=state::FormField::ProductType
                        options=PRODUCT_TYPES.iter().map(|t| t.to_string()).collect()
                    />
                    <TextAreaField ctrl=ctrl field=state::FormField::Description/>
                </FormSection>

                <FormSection ctrl=ctrl id=state::SectionId::Pricing>
                    <TextField ctrl=ctrl field=state::FormField::Mrp input_type="number"/>
                    <TextField ctrl=ctrl field=state::FormField::SellingPrice input_type="number"/>
                    <TextField ctrl=ctrl field=state::FormField::Inventory input_type="number"/>
                    <TextField ctrl=ctrl field=state::FormField::HsnCode placeholder="e.g. 7117"/>
                    <SelectField
                        ctrl=ctrl
                        field=state::FormField::Gst
                        options=GST_RATES.iter().map(|r| r.to_string()).collect()
                    />
                </FormSection>

                <FormSection ctrl=ctrl id=state::SectionId::Attributes>
                    <SelectField
                        ctrl=ctrl
                        field=state::FormField::Material
                        options=MATERIALS.iter().map(|m| m.to_string()).collect()
                    />
                    <TextField ctrl=ctrl field=state::FormField::Color/>
                    <TextField ctrl=ctrl field=state::FormField::Plating/>
                    <TextField ctrl=ctrl field=state::FormField::Size/>
                    <TextField ctrl=ctrl field=state::FormField::StoneType/>
                    <TextField ctrl=ctrl field=state::FormField::Occasion/>
                    <TextField ctrl=ctrl field=state::FormField::NetQuantity input_type="number"/>
                    <TextField ctrl=ctrl field=state::FormField::NetWeight input_type="number"/>
                    <TextField ctrl=ctrl field=state::FormField::Keywords placeholder="comma separated"/>
                </FormSection>

                <FormSection ctrl=ctrl id=state::SectionId::Images>
                    <ImageGallery ctrl=ctrl/>
                </FormSection>

                <FormSection ctrl=ctrl id=state::SectionId::Variants hidden=variants_hidden>
                    <VariantPanel ctrl=ctrl/>
                </FormSection>

                <FormSection ctrl=ctrl id=state::SectionId::Export>
                    <ExportPanel ctrl=ctrl/>
                </FormSection>
            </form>
        </div>

        <Footer/>
    }
}
