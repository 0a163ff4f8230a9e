use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::common::ListEnvelope;
use contracts::domain::department::Department;
use contracts::domain::member::Member;
use contracts::domain::role::Role;

use crate::shared::alert::AlertService;
use crate::shared::api_utils::api_url;
use crate::shared::components::{
    Assignment, AssignmentLabels, Column, DeleteSpec, DynamicDataTable, DynamicForm,
};
use crate::shared::date_utils::format_timestamp;
use crate::shared::forms::{Coerce, FieldSpec, SelectItem};
use crate::shared::http::{self, Method};
use crate::shared::modal::{Modal, ModalService};

fn member_columns() -> Vec<Column<Member>> {
    vec![
        Column::new("Name", |m: &Member| m.name.clone()).sortable("name"),
        Column::new("Email", |m: &Member| m.email.clone()).sortable("email"),
        Column::new("Phone", |m: &Member| m.phone.clone().unwrap_or_default()),
        Column::new("Created", |m: &Member| format_timestamp(m.created_at)).sortable("created_at"),
    ]
}

fn member_fields(departments: &[Department], member: Option<&Member>) -> Vec<FieldSpec> {
    let items: Vec<SelectItem> = departments
        .iter()
        .map(|d| SelectItem::new(d.id.to_string(), d.name.clone()))
        .collect();
    vec![
        FieldSpec::text("name", "Name")
            .required()
            .default_text(member.map(|m| m.name.clone()).unwrap_or_default()),
        FieldSpec::email("email", "Email")
            .required()
            .default_text(member.map(|m| m.email.clone()).unwrap_or_default()),
        FieldSpec::tel("phone", "Phone")
            .default_text(member.and_then(|m| m.phone.clone()).unwrap_or_default()),
        FieldSpec::select("department_id", "Department", items)
            .coerce(Coerce::Numeric)
            .default_text(
                member
                    .and_then(|m| m.department_id)
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ),
    ]
}

/// Member administration: searchable list with inline creation, and a
/// modal with the update form plus role assignment for one member.
#[component]
pub fn MembersPage() -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not provided");
    let modal = use_context::<ModalService>().expect("ModalService not provided");

    let selected: RwSignal<Option<Member>> = RwSignal::new(None);
    let departments: RwSignal<Option<Vec<Department>>> = RwSignal::new(None);
    let reload = RwSignal::new(0u64);

    // The department select needs its options before the table renders.
    spawn_local(async move {
        match http::get_json::<ListEnvelope<Department>>(&api_url("/api/department"), None).await {
            Ok(list) => departments.set(Some(list.into_vec())),
            Err(err) => {
                if !err.is_abort() {
                    alerts.error(format!("Failed to load: {}", err));
                }
                departments.set(Some(Vec::new()));
            }
        }
    });

    let open = Callback::new(move |member: Member| {
        selected.set(Some(member));
        modal.show();
    });
    let delete = DeleteSpec::new(
        |m: &Member| api_url(&format!("/api/member/{}", m.id)),
        |m: &Member| format!("Delete member \"{}\"?", m.name),
        "Delete member",
        "Member deleted",
    );

    let table = move || {
        let delete = delete.clone();
        departments.get().map(|deps| {
            view! {
                <DynamicDataTable
                    base_path="/api/member".to_string()
                    columns=member_columns()
                    fields=member_fields(&deps, None)
                    create_label="New member"
                    on_row_click=Some(open)
                    delete=Some(delete)
                    default_sort=Some("name")
                    searchable=true
                    reload=Some(reload.into())
                />
            }
        })
    };

    let detail = move || {
        selected.get().zip(departments.get()).map(|(member, deps)| {
            let member_id = member.id;
            view! {
                <div class="detail">
                    <h2 class="detail__title">{member.name.clone()}</h2>
                    <DynamicForm
                        fields=member_fields(&deps, Some(&member))
                        url=api_url(&format!("/api/member/{}", member_id))
                        method=Method::Put
                        submit_label="Update".to_string()
                        on_saved=Callback::new(move |()| reload.update(|r| *r += 1))
                    />
                    <h3 class="detail__subtitle">"Roles"</h3>
                    <Assignment
                        all_path="/api/role".to_string()
                        assigned_path=format!("/api/member/{}/role", member_id)
                        link_path=Arc::new(move |role_id: i64| {
                            api_url(&format!("/api/member/{}/role/{}", member_id, role_id))
                        })
                        display=Arc::new(|role: &Role| role.name.clone())
                        labels=AssignmentLabels {
                            available_title: "Available roles",
                            assigned_title: "Assigned roles",
                            assign_title: "Assign role",
                            remove_title: "Remove role",
                            assign_success: "Role assigned",
                            remove_success: "Role removed",
                        }
                    />
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Members"</h1>
            {table}
            <Modal>{detail}</Modal>
        </div>
    }
}
