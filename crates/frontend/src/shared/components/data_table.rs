use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use contracts::domain::common::{Identified, ListQuery, Paginated};

use crate::shared::alert::AlertService;
use crate::shared::api_utils::api_url;
use crate::shared::components::dynamic_form::DynamicForm;
use crate::shared::components::dynamic_table::{Column, DeleteSpec, DynamicTable};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::forms::FieldSpec;
use crate::shared::http::{self, Method};
use crate::shared::icons::icon;
use crate::shared::loader::LoadGuard;
use crate::shared::state::{PaginationState, SortState};

const SEARCH_MIN_CHARS: usize = 3;

/// Full server-backed list screen: create form, debounced search,
/// sortable paginated table and per-row delete, all driven by one
/// REST collection under `base_path`.
///
/// Loading runs through a refresh flag: mutation handlers raise it, a
/// single effect watches only that flag and snapshots the rest of the
/// query state untracked, and only the still-current ticket of the
/// [`LoadGuard`] may write results back.
#[component]
pub fn DynamicDataTable<T>(
    base_path: String,
    columns: Vec<Column<T>>,
    fields: Vec<FieldSpec>,
    #[prop(default = "Create")] create_label: &'static str,
    #[prop(optional_no_strip)] on_row_click: Option<Callback<T>>,
    #[prop(optional_no_strip)] delete: Option<DeleteSpec<T>>,
    #[prop(optional_no_strip)] default_sort: Option<&'static str>,
    /// Constrains the list to rows related to the given ids, e.g.
    /// `("role_id", vec![3])`.
    #[prop(optional_no_strip)]
    filter: Option<(String, Vec<i64>)>,
    #[prop(optional)] searchable: bool,
    /// Withholds the create and delete affordances, for screens that
    /// only browse the collection.
    #[prop(optional)]
    read_only: bool,
    /// Bump to force a reload from outside, e.g. after an edit in a modal.
    #[prop(optional_no_strip)]
    reload: Option<Signal<u64>>,
) -> impl IntoView
where
    T: Identified + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let alerts = use_context::<AlertService>().expect("AlertService not provided");
    let delete = if read_only { None } else { delete };

    let rows: RwSignal<Vec<T>> = RwSignal::new(Vec::new());
    let count = RwSignal::new(0i64);
    let pagination = RwSignal::new(PaginationState::default());
    let sort = RwSignal::new(match default_sort {
        Some(field) => SortState::by(field),
        None => SortState::default(),
    });
    let search = RwSignal::new(String::new());
    let refresh = RwSignal::new(true);
    let loading = RwSignal::new(false);
    let guard = LoadGuard::new();

    let base = StoredValue::new(base_path);
    let filter = StoredValue::new(filter);

    Effect::new(move |_| {
        if !refresh.get() {
            return;
        }
        let paging = pagination.get_untracked();
        let sorting = sort.get_untracked();
        let needle = search.get_untracked();
        let (filter_field, filter_ids) = filter
            .get_value()
            .map(|(field, ids)| (Some(field), ids))
            .unwrap_or((None, Vec::new()));
        let query = ListQuery {
            page: paging.page,
            limit: paging.limit,
            sort_field: sorting.field.map(String::from),
            sort_order: sorting.field.map(|_| sorting.order),
            search: (needle.trim().chars().count() >= SEARCH_MIN_CHARS).then_some(needle),
            filter_field,
            filter_ids,
        };
        let url = base.with_value(|b| http::list_url(b, &query));
        let ticket = guard.begin();
        loading.set(true);
        spawn_local(async move {
            let result = http::get_json::<Paginated<T>>(&url, ticket.abort_signal().as_ref()).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(page_data) => {
                    let total = page_data.count;
                    rows.set(page_data.data);
                    count.set(total);
                    let current = pagination.get_untracked();
                    let clamped = current.clamped(total);
                    if clamped.page != current.page {
                        // Deletes can empty the last page; step back and reload.
                        pagination.set(clamped);
                        refresh.set(true);
                    } else {
                        refresh.set(false);
                    }
                }
                Err(err) => {
                    if !err.is_abort() {
                        alerts.error(format!("Failed to load: {}", err));
                    }
                    refresh.set(false);
                }
            }
            loading.set(false);
        });
    });

    if let Some(reload) = reload {
        Effect::new(move |prev: Option<u64>| {
            let token = reload.get();
            if prev.is_some_and(|p| p != token) {
                refresh.set(true);
            }
            token
        });
    }

    let on_sort = Callback::new(move |field: &'static str| {
        sort.update(|s| *s = s.toggled(field));
        pagination.update(|p| *p = p.with_page(0));
        refresh.set(true);
    });
    let on_search = Callback::new(move |text: String| {
        search.set(text);
        pagination.update(|p| *p = p.with_page(0));
        refresh.set(true);
    });
    let on_page_change = Callback::new(move |page: usize| {
        pagination.update(|p| *p = p.with_page(page as u32));
        refresh.set(true);
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        pagination.update(|p| *p = p.with_limit(size as u32));
        refresh.set(true);
    });
    let changed = Callback::new(move |()| refresh.set(true));

    let creating = RwSignal::new(false);
    let create_url = base.with_value(|b| api_url(b));
    let on_saved = Callback::new(move |()| {
        creating.set(false);
        refresh.set(true);
    });

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <Show when=move || searchable>
                    <SearchInput value=search on_change=on_search />
                </Show>
                {(!read_only).then(|| view! {
                    <button
                        class="button button--primary button--icon"
                        title=create_label
                        on:click=move |_| creating.update(|c| *c = !*c)
                    >
                        {icon("plus")}
                    </button>
                })}
                <button
                    class="button button--icon"
                    title="Refresh"
                    on:click=move |_| refresh.set(true)
                >
                    {icon("refresh")}
                </button>
            </div>
            <Show when=move || creating.get()>
                <div class="data-table__create">
                    <DynamicForm
                        fields=fields.clone()
                        url=create_url.clone()
                        method=Method::Post
                        submit_label=create_label.to_string()
                        reset_on_submit=true
                        on_saved=on_saved
                    />
                </div>
            </Show>
            <Show when=move || loading.get()>
                <div class="data-table__loading">"Loading..."</div>
            </Show>
            <DynamicTable
                rows=rows
                columns=columns
                sort=Some((sort.into(), on_sort))
                on_row_click=on_row_click
                delete=delete
                on_changed=changed
            />
            <PaginationControls
                current_page=Signal::derive(move || pagination.get().page as usize)
                total_pages=Signal::derive(move || {
                    pagination.get().total_pages(count.get()) as usize
                })
                total_count=Signal::derive(move || count.get().max(0) as usize)
                page_size=Signal::derive(move || pagination.get().limit as usize)
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        </div>
    }
}
