use leptos::*;

/// Fill bar for the share of required fields completed.
#[component]
pub fn ProgressBar(
    /// Completion in percent, 0..=100
    #[prop(into)]
    percent: Signal<u32>,
) -> impl IntoView {
    view! {
        <div class="progress-bar" title=move || format!("{}% complete", percent.get())>
            <div
                class="progress-fill"
                style=move || format!("width: {}%;", percent.get())
            ></div>
        </div>
    }
}
