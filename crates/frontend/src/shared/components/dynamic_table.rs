use std::sync::Arc;

use leptos::prelude::*;

use contracts::domain::common::Identified;

use crate::shared::components::confirm_dialog::{ConfirmDialog, ConfirmRequest};
use crate::shared::icons::icon;
use crate::shared::state::SortState;

/// One rendered table column: a header label, an optional server-side
/// sort field and a closure producing the cell text for a row.
#[derive(Clone)]
pub struct Column<T> {
    pub label: &'static str,
    pub sort: Option<&'static str>,
    cell: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Column<T> {
    pub fn new(label: &'static str, cell: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self {
            label,
            sort: None,
            cell: Arc::new(cell),
        }
    }

    pub fn sortable(mut self, field: &'static str) -> Self {
        self.sort = Some(field);
        self
    }

    pub fn cell_text(&self, row: &T) -> String {
        (self.cell)(row)
    }
}

/// Per-row delete affordance. `url` builds the request target, `describe`
/// the confirmation text; rows for which `allowed` is false get no button.
#[derive(Clone)]
pub struct DeleteSpec<T> {
    url: Arc<dyn Fn(&T) -> String + Send + Sync>,
    describe: Arc<dyn Fn(&T) -> String + Send + Sync>,
    allowed: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    pub title: &'static str,
    pub success_message: &'static str,
}

impl<T> DeleteSpec<T> {
    pub fn new(
        url: impl Fn(&T) -> String + Send + Sync + 'static,
        describe: impl Fn(&T) -> String + Send + Sync + 'static,
        title: &'static str,
        success_message: &'static str,
    ) -> Self {
        Self {
            url: Arc::new(url),
            describe: Arc::new(describe),
            allowed: Arc::new(|_| true),
            title,
            success_message,
        }
    }

    pub fn allowed_when(mut self, allowed: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.allowed = Arc::new(allowed);
        self
    }

    pub fn is_allowed(&self, row: &T) -> bool {
        (self.allowed)(row)
    }

    pub fn request_for(&self, row: &T) -> ConfirmRequest {
        ConfirmRequest::delete(
            (self.url)(row),
            self.title,
            (self.describe)(row),
            self.success_message,
        )
    }
}

#[component]
fn SortableHeader(
    label: &'static str,
    field: &'static str,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| on_sort.run(field)
        >
            <span>{label}</span>
            <span class=move || sort.get().indicator_class(field)>
                {move || sort.get().indicator(field)}
            </span>
        </th>
    }
}

/// Row-oriented table over already-loaded data. Row clicks open the
/// record, the optional delete column funnels through one shared
/// confirmation dialog, sortable headers report clicks upward.
#[component]
pub fn DynamicTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(optional_no_strip)] sort: Option<(Signal<SortState>, Callback<&'static str>)>,
    #[prop(optional_no_strip)] on_row_click: Option<Callback<T>>,
    #[prop(optional_no_strip)] delete: Option<DeleteSpec<T>>,
    #[prop(optional)] on_changed: Option<Callback<()>>,
) -> impl IntoView
where
    T: Identified + Clone + Send + Sync + 'static,
{
    let pending: RwSignal<Option<ConfirmRequest>> = RwSignal::new(None);
    let has_delete = delete.is_some();
    let delete = StoredValue::new(delete);
    let columns = StoredValue::new(columns);
    let column_count = columns.with_value(|c| c.len()) + usize::from(has_delete);

    let header = columns.with_value(|cols| {
        cols.iter()
            .map(|col| match (col.sort, sort) {
                (Some(field), Some((sort_state, on_sort))) => view! {
                    <SortableHeader label=col.label field=field sort=sort_state on_sort=on_sort />
                }
                .into_any(),
                _ => view! { <th class="table__header-cell">{col.label}</th> }.into_any(),
            })
            .collect_view()
    });

    let body = move || {
        let data = rows.get();
        if data.is_empty() {
            return view! {
                <tr class="table__row table__row--empty">
                    <td class="table__cell" colspan=column_count>"No records"</td>
                </tr>
            }
            .into_any();
        }
        data.into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            view! { <td class="table__cell">{col.cell_text(&row)}</td> }
                        })
                        .collect_view()
                });
                let delete_cell = delete.with_value(|spec| {
                    spec.as_ref().map(|spec| {
                        let request = spec.is_allowed(&row).then(|| spec.request_for(&row));
                        view! {
                            <td class="table__cell table__cell--actions">
                                {request.map(|request| view! {
                                    <button
                                        class="button button--icon button--danger"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            pending.set(Some(request.clone()));
                                        }
                                    >
                                        {icon("delete")}
                                    </button>
                                })}
                            </td>
                        }
                    })
                });
                let clicked = row.clone();
                view! {
                    <tr
                        class="table__row"
                        class:table__row--clickable=on_row_click.is_some()
                        on:click=move |_| {
                            if let Some(cb) = on_row_click {
                                cb.run(clicked.clone());
                            }
                        }
                    >
                        {cells}
                        {delete_cell}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table__wrapper">
            <table class="table">
                <thead class="table__head">
                    <tr>
                        {header}
                        {has_delete.then(|| view! { <th class="table__header-cell table__header-cell--actions"></th> })}
                    </tr>
                </thead>
                <tbody class="table__body">{body}</tbody>
            </table>
            <ConfirmDialog
                request=pending
                on_confirmed=Callback::new(move |()| {
                    if let Some(cb) = on_changed {
                        cb.run(());
                    }
                })
                on_close=Callback::new(move |()| pending.set(None))
            />
        </div>
    }
}
