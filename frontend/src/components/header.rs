use leptos::*;

use crate::components::ProgressBar;
use crate::PageController;

#[component]
pub fn Header(ctrl: PageController) -> impl IntoView {
    let percent = Signal::derive(move || ctrl.progress());

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"LISTING DESK"</a>
                <span class="badge">
                    {move || format!("{}% complete", percent.get())}
                </span>
            </div>
            <div class="header-right">
                <ProgressBar percent=percent/>
            </div>
        </header>
    }
}
