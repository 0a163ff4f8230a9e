use leptos::prelude::*;

use crate::domain::departments::DepartmentsPage;
use crate::domain::manuals::ManualsPage;
use crate::domain::members::MembersPage;
use crate::domain::quizzes::QuizzesPage;
use crate::domain::roles::RolesPage;
use crate::layout::{NavContext, Shell, use_nav};
use crate::system::pages::{HomePage, LandingPage};
use crate::system::session::{RequireElevated, use_session};

/// Top-level gate: landing page until the probe confirms a session,
/// then the signed-in shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show when=move || session.get().probed>
            <Show
                when=move || session.get().signed_in()
                fallback=|| view! { <LandingPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let nav = NavContext::new();
    provide_context(nav);
    nav.init_url_sync();

    view! {
        <Shell>
            <ActivePage />
        </Shell>
    }
}

/// Maps the active navigation key to a screen. Unknown keys fall back
/// to home; `role-<id>` keys open the published manuals of that role.
#[component]
fn ActivePage() -> impl IntoView {
    let nav = use_nav();
    let (session, _) = use_session();

    move || {
        let key = nav.active.get();
        match key.as_str() {
            "home" => view! { <HomePage /> }.into_any(),
            "members" => view! {
                <RequireElevated>
                    <MembersPage />
                </RequireElevated>
            }
            .into_any(),
            "roles" => view! {
                <RequireElevated>
                    <RolesPage />
                </RequireElevated>
            }
            .into_any(),
            "departments" => view! {
                <RequireElevated>
                    <DepartmentsPage />
                </RequireElevated>
            }
            .into_any(),
            "manuals" => view! {
                <RequireElevated>
                    <ManualsPage />
                </RequireElevated>
            }
            .into_any(),
            "quizzes" => view! {
                <RequireElevated>
                    <QuizzesPage />
                </RequireElevated>
            }
            .into_any(),
            other => {
                let role = session.get().info.and_then(|info| {
                    info.roles
                        .into_iter()
                        .find(|role| format!("role-{}", role.id) == other)
                });
                match role {
                    Some(role) => view! {
                        <ManualsPage
                            filter=Some(("role_id".to_string(), vec![role.id]))
                            read_only=true
                        />
                    }
                    .into_any(),
                    None => view! { <HomePage /> }.into_any(),
                }
            }
        }
    }
}
