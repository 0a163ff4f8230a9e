use leptos::prelude::*;

use contracts::domain::department::Department;

use crate::shared::api_utils::api_url;
use crate::shared::components::{Column, DeleteSpec, DynamicDataTable, DynamicForm};
use crate::shared::date_utils::format_timestamp;
use crate::shared::forms::FieldSpec;
use crate::shared::http::Method;
use crate::shared::modal::{Modal, ModalService};

fn department_columns() -> Vec<Column<Department>> {
    vec![
        Column::new("Name", |d: &Department| d.name.clone()).sortable("name"),
        Column::new("Created", |d: &Department| format_timestamp(d.created_at))
            .sortable("created_at"),
    ]
}

fn department_fields(department: Option<&Department>) -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("name", "Name")
            .required()
            .default_text(department.map(|d| d.name.clone()).unwrap_or_default()),
    ]
}

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided");

    let selected: RwSignal<Option<Department>> = RwSignal::new(None);
    let reload = RwSignal::new(0u64);

    let open = Callback::new(move |department: Department| {
        selected.set(Some(department));
        modal.show();
    });
    let delete = DeleteSpec::new(
        |d: &Department| api_url(&format!("/api/department/{}", d.id)),
        |d: &Department| format!("Delete department \"{}\"?", d.name),
        "Delete department",
        "Department deleted",
    );

    let detail = move || {
        selected.get().map(|department| {
            view! {
                <div class="detail">
                    <h2 class="detail__title">{department.name.clone()}</h2>
                    <DynamicForm
                        fields=department_fields(Some(&department))
                        url=api_url(&format!("/api/department/{}", department.id))
                        method=Method::Put
                        submit_label="Update".to_string()
                        on_saved=Callback::new(move |()| reload.update(|r| *r += 1))
                    />
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Departments"</h1>
            <DynamicDataTable
                base_path="/api/department".to_string()
                columns=department_columns()
                fields=department_fields(None)
                create_label="New department"
                on_row_click=Some(open)
                delete=Some(delete)
                default_sort=Some("name")
                searchable=true
                reload=Some(reload.into())
            />
            <Modal>{detail}</Modal>
        </div>
    }
}
