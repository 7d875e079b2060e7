//! Footer component

use leptos::*;

use crate::Marketplace;

#[component]
pub fn Footer() -> impl IntoView {
    let targets = Marketplace::ALL
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(" • ");

    view! {
        <footer>
            <div>"Exports to " {targets} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
