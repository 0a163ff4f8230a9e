use leptos::prelude::*;

use crate::layout::nav_context::use_nav;
use crate::shared::alert::AlertService;
use crate::shared::icons::icon;
use crate::system::session::use_session;

/// Left navigation. Management entries appear only for elevated users;
/// below them, one entry per role the user holds, opening that role's
/// published manuals.
#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();
    let alerts = use_context::<AlertService>().expect("AlertService not provided");
    let (session, _) = use_session();

    let management = [
        ("members", "Members"),
        ("roles", "Roles"),
        ("departments", "Departments"),
        ("manuals", "Manuals"),
        ("quizzes", "Quizzes"),
    ];

    let entry = move |key: String, title: String, icon_key: &'static str| {
        let active_key = key.clone();
        view! {
            <li
                class="sidebar__item"
                class:sidebar__item--active=move || nav.active.get() == active_key
                on:click=move |_| {
                    alerts.dismiss();
                    nav.activate(&key);
                }
            >
                {icon(icon_key)}
                <span>{title}</span>
            </li>
        }
    };

    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {entry("home".to_string(), "Home".to_string(), "home")}
                <Show when=move || session.get().is_elevated()>
                    {management
                        .into_iter()
                        .map(|(key, title)| entry(key.to_string(), title.to_string(), key))
                        .collect_view()}
                </Show>
                {move || {
                    session
                        .get()
                        .info
                        .map(|info| {
                            info.roles
                                .into_iter()
                                .map(|role| {
                                    entry(format!("role-{}", role.id), role.name, "manuals")
                                })
                                .collect_view()
                        })
                }}
            </ul>
        </nav>
    }
}
