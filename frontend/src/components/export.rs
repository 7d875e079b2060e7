//! Form actions and marketplace export.

use leptos::*;

use crate::{Marketplace, PageController};

/// Validate / save buttons and one export card per marketplace.
#[component]
pub fn ExportPanel(ctrl: PageController) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button type="button" class="btn btn-secondary" id="validateForm"
                on:click=move |_| {
                    ctrl.validate_form();
                }
            >
                "Validate"
            </button>
            <button type="button" class="btn btn-secondary" id="saveProduct"
                on:click=move |_| {
                    ctrl.save_product();
                }
            >
                "Save Product"
            </button>
        </div>
        <div class="status-grid">
            {Marketplace::ALL
                .into_iter()
                .map(|marketplace| view! { <ExportCard ctrl=ctrl marketplace=marketplace/> })
                .collect_view()}
        </div>
    }
}

/// Status card and export button for one marketplace.
///
/// Cards never disable each other; several exports may run at once.
#[component]
fn ExportCard(ctrl: PageController, marketplace: Marketplace) -> impl IntoView {
    let status = move || ctrl.session.with(|s| s.export_status(marketplace));

    let on_export = move |_| {
        spawn_local(async move {
            ctrl.export(marketplace).await;
        });
    };

    view! {
        <div class="status-card">
            <h4>{marketplace.label()}</h4>
            <span class=move || status().css_class()></span>
            <p>{move || status().label()}</p>
            <button
                type="button"
                class="btn btn-primary"
                id=format!("export{}", marketplace.label())
                on:click=on_export
            >
                {format!("Export to {}", marketplace.label())}
            </button>
        </div>
    }
}
