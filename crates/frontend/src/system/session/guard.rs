use leptos::prelude::*;

use super::context::use_session;

/// Hides management screens from plain users. The backend enforces the
/// same tier on every request; this only removes the affordance.
#[component]
pub fn RequireElevated(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    view! {
        <Show
            when=move || session.get().is_elevated()
            fallback=|| view! {
                <div class="page page--denied">
                    <p>"You do not have access to this page."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
