use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use contracts::domain::common::{Identified, ListEnvelope};

use crate::shared::alert::AlertService;
use crate::shared::api_utils::api_url;
use crate::shared::components::confirm_dialog::{ConfirmDialog, ConfirmRequest};
use crate::shared::http::{self, Method};
use crate::shared::icons::icon;
use crate::shared::loader::LoadGuard;

/// Wording for one assignment pairing, supplied by the page.
#[derive(Clone, Copy)]
pub struct AssignmentLabels {
    pub available_title: &'static str,
    pub assigned_title: &'static str,
    pub assign_title: &'static str,
    pub remove_title: &'static str,
    pub assign_success: &'static str,
    pub remove_success: &'static str,
}

/// Rows from `all` that are not in `assigned`, compared by id.
pub fn available_rows<T: Identified>(all: Vec<T>, assigned: &[T]) -> Vec<T> {
    let taken: HashSet<i64> = assigned.iter().map(|row| row.id()).collect();
    all.into_iter()
        .filter(|row| !taken.contains(&row.id()))
        .collect()
}

/// Dual-list widget for a many-to-many relation. The left column lists
/// assigned rows, the right column everything still available; both
/// toggles confirm first and then POST or DELETE the link URL. No
/// optimistic update: each confirmed change refetches both lists.
#[component]
pub fn Assignment<T>(
    /// Collection of all candidates, e.g. `/api/role`.
    all_path: String,
    /// Currently-assigned subset, e.g. `/api/member/7/role`.
    assigned_path: String,
    /// Builds the link URL for one candidate id,
    /// e.g. `/api/member/7/role/{id}`.
    link_path: Arc<dyn Fn(i64) -> String + Send + Sync>,
    display: Arc<dyn Fn(&T) -> String + Send + Sync>,
    labels: AssignmentLabels,
) -> impl IntoView
where
    T: Identified + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let alerts = use_context::<AlertService>().expect("AlertService not provided");

    let all: RwSignal<Vec<T>> = RwSignal::new(Vec::new());
    let assigned: RwSignal<Vec<T>> = RwSignal::new(Vec::new());
    let refresh = RwSignal::new(true);
    let pending: RwSignal<Option<ConfirmRequest>> = RwSignal::new(None);
    let guard = LoadGuard::new();

    let all_url = api_url(&all_path);
    let assigned_url = api_url(&assigned_path);

    Effect::new(move |_| {
        if !refresh.get() {
            return;
        }
        let ticket = guard.begin();
        let all_url = all_url.clone();
        let assigned_url = assigned_url.clone();
        spawn_local(async move {
            let signal = ticket.abort_signal();
            let all_result =
                http::get_json::<ListEnvelope<T>>(&all_url, signal.as_ref()).await;
            let assigned_result =
                http::get_json::<ListEnvelope<T>>(&assigned_url, signal.as_ref()).await;
            if !ticket.is_current() {
                return;
            }
            match (all_result, assigned_result) {
                (Ok(candidates), Ok(members)) => {
                    all.set(candidates.into_vec());
                    assigned.set(members.into_vec());
                }
                (Err(err), _) | (_, Err(err)) => {
                    if !err.is_abort() {
                        alerts.error(format!("Failed to load: {}", err));
                    }
                }
            }
            refresh.set(false);
        });
    });

    let available = Signal::derive(move || available_rows(all.get(), &assigned.get()));

    let confirmed = Callback::new(move |()| refresh.set(true));
    let closed = Callback::new(move |()| pending.set(None));

    let assigned_column = {
        let display = display.clone();
        let link_path = link_path.clone();
        move || {
            assigned
                .get()
                .into_iter()
                .map(|row| {
                    let text = display(&row);
                    let request = ConfirmRequest {
                        method: Method::Delete,
                        url: link_path(row.id()),
                        title: labels.remove_title.to_string(),
                        description: text.clone(),
                        success_message: labels.remove_success.to_string(),
                    };
                    view! {
                        <li class="assignment__row">
                            <span class="assignment__label">{text}</span>
                            <button
                                class="button button--icon"
                                title=labels.remove_title
                                on:click=move |_| pending.set(Some(request.clone()))
                            >
                                {icon("arrow-right")}
                            </button>
                        </li>
                    }
                })
                .collect_view()
        }
    };

    let available_column = move || {
        available
            .get()
            .into_iter()
            .map(|row| {
                let text = display(&row);
                let request = ConfirmRequest {
                    method: Method::Post,
                    url: link_path(row.id()),
                    title: labels.assign_title.to_string(),
                    description: text.clone(),
                    success_message: labels.assign_success.to_string(),
                };
                view! {
                    <li class="assignment__row">
                        <button
                            class="button button--icon"
                            title=labels.assign_title
                            on:click=move |_| pending.set(Some(request.clone()))
                        >
                            {icon("arrow-left")}
                        </button>
                        <span class="assignment__label">{text}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="assignment">
            <div class="assignment__column">
                <h4 class="assignment__title">{labels.assigned_title}</h4>
                <ul class="assignment__list">{assigned_column}</ul>
            </div>
            <div class="assignment__column">
                <h4 class="assignment__title">{labels.available_title}</h4>
                <ul class="assignment__list">{available_column}</ul>
            </div>
            <ConfirmDialog request=pending on_confirmed=confirmed on_close=closed />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::role::Role;
    use contracts::system::session::AccessLevel;

    fn role(id: i64, name: &str) -> Role {
        Role {
            id,
            name: name.to_string(),
            path: format!("/{}", name),
            access: AccessLevel::User,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn available_is_set_difference_by_id() {
        let all = vec![role(1, "admin"), role(2, "editor"), role(3, "viewer")];
        let assigned = vec![role(2, "editor")];
        let left: Vec<i64> = available_rows(all, &assigned)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(left, vec![1, 3]);
    }

    #[test]
    fn available_ignores_assigned_rows_missing_from_all() {
        let all = vec![role(1, "admin")];
        let assigned = vec![role(9, "ghost")];
        assert_eq!(available_rows(all, &assigned).len(), 1);
    }

    #[test]
    fn nothing_available_when_everything_assigned() {
        let all = vec![role(1, "admin"), role(2, "editor")];
        let assigned = all.clone();
        assert!(available_rows(all, &assigned).is_empty());
    }
}
