use leptos::*;

use crate::{PageController, Variant};

/// Generate button plus the list of generated size variants.
#[component]
pub fn VariantPanel(ctrl: PageController) -> impl IntoView {
    let variants = move || ctrl.session.with(|s| s.variants.clone());
    let list_visible = move || ctrl.session.with(|s| s.variants_list_visible);

    let on_generate = move |_| {
        spawn_local(async move {
            ctrl.generate_variants().await;
        });
    };

    view! {
        <div class="variant-section" id="variantSection">
            <p class="section-hint">"Bangles are listed once per size. Generate the size SKUs from the base SKU."</p>
            <button type="button" class="btn btn-secondary" id="generateVariants" on:click=on_generate>
                "Generate Variants"
            </button>
            <div
                class="variants-list"
                id="variantsList"
                style:display=move || if list_visible() { "block" } else { "none" }
            >
                <For
                    each=variants
                    key=|variant| variant.sku.clone()
                    children=move |variant: Variant| {
                        let sku = variant.sku.clone();
                        view! {
                            <div class="variant-item">
                                <div class="variant-info">
                                    <div class="variant-size">"Size: " {variant.size}</div>
                                    <div class="variant-sku">{variant.sku}</div>
                                </div>
                                <button
                                    type="button"
                                    class="btn btn-outline"
                                    on:click=move |_| ctrl.remove_variant(&sku)
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
