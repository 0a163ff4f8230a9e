use leptos::prelude::*;

use crate::layout::use_nav;
use crate::shared::icons::icon;
use crate::system::session::use_session;

/// Default screen after sign-in: one card per reachable area.
#[component]
pub fn HomePage() -> impl IntoView {
    let nav = use_nav();
    let (session, _) = use_session();

    let card = move |key: String, title: String, icon_key: &'static str| {
        view! {
            <div class="home__card" on:click=move |_| nav.activate(&key)>
                {icon(icon_key)}
                <span class="home__card-title">{title}</span>
            </div>
        }
    };

    let management = move || {
        session.get().is_elevated().then(|| {
            [
                ("members", "Members"),
                ("roles", "Roles"),
                ("departments", "Departments"),
                ("manuals", "Manuals"),
                ("quizzes", "Quizzes"),
            ]
            .into_iter()
            .map(|(key, title)| card(key.to_string(), title.to_string(), key))
            .collect_view()
        })
    };

    let role_cards = move || {
        session.get().info.map(|info| {
            info.roles
                .into_iter()
                .map(|role| card(format!("role-{}", role.id), role.name, "manuals"))
                .collect_view()
        })
    };

    view! {
        <div class="page home">
            <h1 class="page__title">"Home"</h1>
            <div class="home__cards">
                {management}
                {role_cards}
            </div>
        </div>
    }
}
