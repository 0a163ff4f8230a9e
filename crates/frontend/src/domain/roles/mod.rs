use std::sync::Arc;

use leptos::prelude::*;

use contracts::domain::member::Member;
use contracts::domain::role::Role;
use contracts::system::session::AccessLevel;

use crate::shared::api_utils::api_url;
use crate::shared::components::{
    Assignment, AssignmentLabels, Column, DeleteSpec, DynamicDataTable, DynamicForm,
};
use crate::shared::date_utils::format_timestamp;
use crate::shared::forms::{FieldSpec, SelectItem};
use crate::shared::http::Method;
use crate::shared::modal::{Modal, ModalService};

fn access_label(access: AccessLevel) -> &'static str {
    match access {
        AccessLevel::User => "User",
        AccessLevel::Manager => "Manager",
        AccessLevel::Admin => "Admin",
    }
}

fn role_columns() -> Vec<Column<Role>> {
    vec![
        Column::new("Name", |r: &Role| r.name.clone()).sortable("name"),
        Column::new("Path", |r: &Role| r.path.clone()),
        Column::new("Access", |r: &Role| access_label(r.access).to_string()).sortable("access"),
        Column::new("Created", |r: &Role| format_timestamp(r.created_at)).sortable("created_at"),
    ]
}

fn access_items() -> Vec<SelectItem> {
    vec![
        SelectItem::new("USER", "User"),
        SelectItem::new("MANAGER", "Manager"),
        SelectItem::new("ADMIN", "Admin"),
    ]
}

fn role_fields(role: Option<&Role>) -> Vec<FieldSpec> {
    let access = role
        .map(|r| match r.access {
            AccessLevel::User => "USER",
            AccessLevel::Manager => "MANAGER",
            AccessLevel::Admin => "ADMIN",
        })
        .unwrap_or("USER");
    vec![
        FieldSpec::text("name", "Name")
            .required()
            .default_text(role.map(|r| r.name.clone()).unwrap_or_default()),
        FieldSpec::text("path", "Path")
            .required()
            .default_text(role.map(|r| r.path.clone()).unwrap_or_default()),
        FieldSpec::radio("access", "Access", access_items()).default_text(access),
    ]
}

/// Role administration: list plus a modal with the update form and the
/// members assigned to the role.
#[component]
pub fn RolesPage() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided");

    let selected: RwSignal<Option<Role>> = RwSignal::new(None);
    let reload = RwSignal::new(0u64);

    let open = Callback::new(move |role: Role| {
        selected.set(Some(role));
        modal.show();
    });
    let delete = DeleteSpec::new(
        |r: &Role| api_url(&format!("/api/role/{}", r.id)),
        |r: &Role| format!("Delete role \"{}\"?", r.name),
        "Delete role",
        "Role deleted",
    );

    let detail = move || {
        selected.get().map(|role| {
            let role_id = role.id;
            view! {
                <div class="detail">
                    <h2 class="detail__title">{role.name.clone()}</h2>
                    <DynamicForm
                        fields=role_fields(Some(&role))
                        url=api_url(&format!("/api/role/{}", role_id))
                        method=Method::Put
                        submit_label="Update".to_string()
                        on_saved=Callback::new(move |()| reload.update(|r| *r += 1))
                    />
                    <h3 class="detail__subtitle">"Members"</h3>
                    <Assignment
                        all_path="/api/member".to_string()
                        assigned_path=format!("/api/role/{}/member", role_id)
                        link_path=Arc::new(move |member_id: i64| {
                            api_url(&format!("/api/role/{}/member/{}", role_id, member_id))
                        })
                        display=Arc::new(|member: &Member| member.name.clone())
                        labels=AssignmentLabels {
                            available_title: "Available members",
                            assigned_title: "Assigned members",
                            assign_title: "Assign member",
                            remove_title: "Remove member",
                            assign_success: "Member assigned",
                            remove_success: "Member removed",
                        }
                    />
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Roles"</h1>
            <DynamicDataTable
                base_path="/api/role".to_string()
                columns=role_columns()
                fields=role_fields(None)
                create_label="New role"
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
