//! SKU field with backend lookup, and the image gallery it feeds.

use leptos::*;
use web_sys::HtmlInputElement;

use crate::state::{FormField, Session};
use crate::{PageController, IMAGE_ROOT};

/// What the gallery shows.
#[derive(Clone, Debug, PartialEq)]
pub enum Gallery {
    /// No SKU has been looked up yet.
    Idle,
    /// The SKU folder exists but holds no images.
    Empty { sku: String },
    Thumbnails { sku: String, items: Vec<Thumb> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Thumb {
    pub label: String,
    pub src: String,
    pub placeholder: String,
}

impl Gallery {
    pub fn from_session(session: &Session) -> Self {
        let Some(sku) = session.image_sku.clone() else {
            return Gallery::Idle;
        };
        if session.images.is_empty() {
            return Gallery::Empty { sku };
        }
        let items = session
            .images
            .iter()
            .map(|filename| Thumb {
                label: filename.clone(),
                src: image_url(&sku, filename),
                placeholder: placeholder_svg(filename),
            })
            .collect();
        Gallery::Thumbnails { sku, items }
    }

    pub fn heading(&self) -> String {
        match self {
            Gallery::Idle => "📁 Enter a SKU to load its images".to_string(),
            Gallery::Empty { sku } | Gallery::Thumbnails { sku, .. } => {
                format!("📁 Images loaded from: images/{}/", sku)
            }
        }
    }
}

/// Public URL of one image in a SKU folder.
pub fn image_url(sku: &str, filename: &str) -> String {
    format!("{}/{}/{}", IMAGE_ROOT, sku, filename)
}

/// Inline SVG shown when a thumbnail fails to load, labeled with the filename.
pub fn placeholder_svg(filename: &str) -> String {
    let label: String = filename
        .chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            c => c.to_string(),
        })
        .collect();
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="120"><rect width="120" height="120" fill="#ddd"/><text x="50%" y="50%" text-anchor="middle" dy=".3em">{}</text></svg>"##,
        label
    );
    format!("data:image/svg+xml,{}", percent_encode(&svg))
}

/// RFC 3986 percent-encoding of UTF-8 bytes; only unreserved characters pass.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// SKU input. Leaving the field triggers a lookup.
#[component]
pub fn SkuField(ctrl: PageController) -> impl IntoView {
    let sku_error = move || ctrl.session.with(|s| s.sku_error.clone());

    let on_blur = move |ev: web_sys::FocusEvent| {
        let input: HtmlInputElement = event_target(&ev);
        let sku = input.value();
        if sku.is_empty() {
            return;
        }
        spawn_local(async move {
            ctrl.validate_sku(sku).await;
        });
    };

    view! {
        <div class="form-group">
            <label for="sku">"SKU *"</label>
            <input
                type="text"
                id="sku"
                name=FormField::Sku.key()
                required=true
                placeholder="e.g. BANGLE-001"
                class:error=move || sku_error().is_some()
                prop:value=move || ctrl.form.with(|f| f.get(FormField::Sku).to_string())
                on:input=move |ev| ctrl.set_field(FormField::Sku, event_target_value(&ev))
                on:blur=on_blur
            />
            <Show when=move || sku_error().is_some() fallback=|| view! {}>
                <div class="validation-message" id="skuValidation">
                    {move || sku_error().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}

/// One thumbnail; swaps to the placeholder if the image cannot load.
#[component]
fn Thumbnail(thumb: Thumb) -> impl IntoView {
    let (failed, set_failed) = create_signal(false);
    let Thumb { label, src, placeholder } = thumb;
    let current_src = move || if failed.get() { placeholder.clone() } else { src.clone() };

    view! {
        <div class="image-preview-item">
            <img src=current_src alt=label.clone() on:error=move |_| set_failed.set(true)/>
            <div class="image-info">{label}</div>
        </div>
    }
}

/// Thumbnails for the last successfully looked-up SKU.
#[component]
pub fn ImageGallery(ctrl: PageController) -> impl IntoView {
    let gallery = create_memo(move |_| ctrl.session.with(Gallery::from_session));

    view! {
        <div class="image-upload" id="imageUpload">
            <h4>{move || gallery.with(Gallery::heading)}</h4>
            <div class="image-preview" id="imagePreview">
                {move || match gallery.get() {
                    Gallery::Idle => view! {}.into_view(),
                    Gallery::Empty { .. } => {
                        view! { <p>"No images found for this SKU"</p> }.into_view()
                    }
                    Gallery::Thumbnails { items, .. } => items
                        .into_iter()
                        .map(|thumb| view! { <Thumbnail thumb=thumb/> })
                        .collect_view(),
                }}
            </div>
        </div>
    }
}
