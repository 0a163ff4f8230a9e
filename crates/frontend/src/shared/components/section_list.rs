use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use contracts::domain::common::{Identified, ListEnvelope};

use crate::shared::alert::AlertService;
use crate::shared::api_utils::api_url;
use crate::shared::components::dynamic_form::DynamicForm;
use crate::shared::components::dynamic_table::{Column, DeleteSpec, DynamicTable};
use crate::shared::forms::FieldSpec;
use crate::shared::http::{self, Method};
use crate::shared::loader::LoadGuard;

/// Flat list of child rows under one parent resource, with inline
/// creation against the same nested collection URL. When the parent
/// carries a `prevent_edit` or `prevent_delete` lock the matching
/// affordance is withheld entirely; the server enforces the same rule.
#[component]
pub fn SectionList<T>(
    /// Nested collection, e.g. `/api/manual/3/section`. Listed with GET,
    /// created into with POST.
    list_path: String,
    fields: Vec<FieldSpec>,
    columns: Vec<Column<T>>,
    delete: DeleteSpec<T>,
    #[prop(default = "Add")] create_label: &'static str,
    #[prop(optional_no_strip)] on_open: Option<Callback<T>>,
    #[prop(optional)] prevent_edit: bool,
    #[prop(optional)] prevent_delete: bool,
) -> impl IntoView
where
    T: Identified + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let alerts = use_context::<AlertService>().expect("AlertService not provided");

    let rows: RwSignal<Vec<T>> = RwSignal::new(Vec::new());
    let refresh = RwSignal::new(true);
    let guard = LoadGuard::new();

    let list_url = api_url(&list_path);
    let create_url = list_url.clone();

    Effect::new(move |_| {
        if !refresh.get() {
            return;
        }
        let ticket = guard.begin();
        let url = list_url.clone();
        spawn_local(async move {
            let result =
                http::get_json::<ListEnvelope<T>>(&url, ticket.abort_signal().as_ref()).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(list) => rows.set(list.into_vec()),
                Err(err) => {
                    if !err.is_abort() {
                        alerts.error(format!("Failed to load: {}", err));
                    }
                }
            }
            refresh.set(false);
        });
    });

    let changed = Callback::new(move |()| refresh.set(true));
    let delete = if prevent_delete {
        delete.allowed_when(|_| false)
    } else {
        delete
    };

    view! {
        <div class="section-list">
            {(!prevent_edit).then(|| view! {
                <div class="section-list__create">
                    <DynamicForm
                        fields=fields.clone()
                        url=create_url.clone()
                        method=Method::Post
                        submit_label=create_label.to_string()
                        reset_on_submit=true
                        on_saved=changed
                    />
                </div>
            })}
            <DynamicTable
                rows=rows
                columns=columns
                on_row_click=on_open
                delete=Some(delete)
                on_changed=changed
            />
        </div>
    }
}
