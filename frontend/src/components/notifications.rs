//! Stacked, auto-dismissing toasts.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::Notification;
use crate::{PageController, NOTIFICATION_FADE_MS};

/// Renders the notification stack of the controller.
///
/// Each toast fades after its own timeout and is removed once the fade
/// transition is over. The close button removes it at once.
#[component]
pub fn NotificationArea(ctrl: PageController) -> impl IntoView {
    let notifications = ctrl.notifications;

    view! {
        <div class="toast-container">
            <For
                each=move || notifications.with(|n| n.items().to_vec())
                key=|item| item.id
                children=move |item: Notification| {
                    let id = item.id;
                    Timeout::new(item.timeout_ms, move || {
                        notifications.update(|n| n.begin_fade(id));
                        Timeout::new(NOTIFICATION_FADE_MS, move || {
                            notifications.update(|n| n.dismiss(id));
                        })
                        .forget();
                    })
                    .forget();

                    view! {
                        <div
                            class=item.kind.css_class()
                            class:fade-out=move || notifications.with(|n| n.is_fading(id))
                        >
                            <span class="toast-icon">{item.kind.emoji()}</span>
                            <div class="toast-content">
                                <div class="toast-title">{item.title}</div>
                                <div class="toast-message">{item.message}</div>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Close"
                                on:click=move |_| notifications.update(|n| n.dismiss(id))
                            >
                                "✖"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
