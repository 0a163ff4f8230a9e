use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::alert::AlertService;
use crate::shared::icons::icon;
use crate::system::session::{api, SessionState, use_session};

/// Application bar: product name, the businesses attached to the
/// session and the sign-out button. Sign-out clears the local session
/// even when the server call fails; the cookie is gone either way
/// next time the probe runs.
#[component]
pub fn TopHeader() -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not provided");
    let (session, set_session) = use_session();

    let logout = move |_| {
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                if !err.is_abort() {
                    log::debug!("logout: {}", err);
                }
            }
            alerts.dismiss();
            set_session.set(SessionState {
                probed: true,
                info: None,
            });
        });
    };

    let businesses = move || {
        session
            .get()
            .info
            .map(|info| {
                info.businesses
                    .into_iter()
                    .map(|b| view! { <span class="top-header__business">{b.name}</span> })
                    .collect_view()
            })
    };

    view! {
        <header class="top-header">
            <span class="top-header__brand">"OnBoard"</span>
            <div class="top-header__businesses">{businesses}</div>
            <button class="button button--icon top-header__logout" title="Sign out" on:click=logout>
                {icon("logout")}
            </button>
        </header>
    }
}
