use leptos::*;

use crate::state::SectionId;
use crate::PageController;

/// A collapsible region of the form. Clicking the header flips it.
#[component]
pub fn FormSection(
    ctrl: PageController,
    id: SectionId,
    /// Hide the whole section, e.g. variants outside their category
    #[prop(optional, into)]
    hidden: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let collapsed = move || ctrl.sections.with(|s| s.is_collapsed(id));
    let hidden = move || hidden.map(|h| h.get()).unwrap_or(false);

    view! {
        <section
            class="form-section"
            class:collapsed=collapsed
            style:display=move || if hidden() { "none" } else { "block" }
        >
            <div class="section-header" on:click=move |_| ctrl.toggle_section(id)>
                <h3>{id.title()}</h3>
                <span class="section-chevron">{move || if collapsed() { "▶" } else { "▼" }}</span>
            </div>
            <div class="section-body">
                {children()}
            </div>
        </section>
    }
}
