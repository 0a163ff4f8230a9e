use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::alert::AlertService;
use crate::shared::http::{self, Method};

/// A single destructive action waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmRequest {
    pub method: Method,
    pub url: String,
    pub title: String,
    pub description: String,
    pub success_message: String,
}

impl ConfirmRequest {
    pub fn delete(
        url: String,
        title: impl Into<String>,
        description: String,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            method: Method::Delete,
            url,
            title: title.into(),
            description,
            success_message: success_message.into(),
        }
    }
}

/// Modal confirmation for destructive requests. Visible while `request`
/// holds a value; both outcomes close the dialog and clear the request.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] request: Signal<Option<ConfirmRequest>>,
    #[prop(optional)] on_confirmed: Option<Callback<()>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not provided");
    let (busy, set_busy) = signal(false);

    let confirm = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(req) = request.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match http::send(req.method, &req.url).await {
                Ok(()) => {
                    alerts.success(req.success_message.clone());
                    if let Some(cb) = on_confirmed {
                        cb.run(());
                    }
                }
                Err(err) if !err.is_abort() => alerts.error(err.to_string()),
                Err(_) => {}
            }
            set_busy.set(false);
            on_close.run(());
        });
    };

    view! {
        <Show when=move || request.get().is_some()>
            <div
                class="confirm__overlay"
                on:click=move |_| {
                    // Same rule as the Cancel button: no escape mid-request.
                    if !busy.get_untracked() {
                        on_close.run(());
                    }
                }
            >
                <div class="confirm__dialog" on:click=move |ev| ev.stop_propagation()>
                    <h3 class="confirm__title">
                        {move || request.get().map(|r| r.title).unwrap_or_default()}
                    </h3>
                    <p class="confirm__description">
                        {move || request.get().map(|r| r.description).unwrap_or_default()}
                    </p>
                    <div class="confirm__actions">
                        <button
                            class="button button--danger"
                            disabled=move || busy.get()
                            on:click=confirm
                        >
                            "Confirm"
                        </button>
                        <button
                            class="button button--secondary"
                            disabled=move || busy.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
