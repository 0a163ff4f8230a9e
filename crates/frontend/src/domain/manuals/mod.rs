use leptos::prelude::*;

use contracts::domain::manual::{Content, Manual, ManualSection};

use crate::shared::api_utils::api_url;
use crate::shared::components::{Column, DeleteSpec, DynamicDataTable, DynamicForm, SectionList};
use crate::shared::date_utils::format_timestamp;
use crate::shared::forms::FieldSpec;
use crate::shared::http::Method;
use crate::shared::icons::icon;

fn manual_columns() -> Vec<Column<Manual>> {
    vec![
        Column::new("Title", |m: &Manual| m.title.clone()).sortable("title"),
        Column::new("Priority", |m: &Manual| {
            m.priority.map(|p| p.to_string()).unwrap_or_default()
        })
        .sortable("priority"),
        Column::new("Published", |m: &Manual| {
            if m.publish { "Yes" } else { "No" }.to_string()
        }),
        Column::new("Created", |m: &Manual| format_timestamp(m.created_at)).sortable("created_at"),
    ]
}

fn manual_fields(manual: Option<&Manual>) -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("title", "Title")
            .required()
            .default_text(manual.map(|m| m.title.clone()).unwrap_or_default()),
        FieldSpec::text("description", "Description")
            .default_text(manual.and_then(|m| m.description.clone()).unwrap_or_default()),
        FieldSpec::number("priority", "Priority").default_text(
            manual
                .and_then(|m| m.priority)
                .map(|p| p.to_string())
                .unwrap_or_default(),
        ),
        FieldSpec::checkbox("publish", "Published").default_value(
            crate::shared::forms::FieldValue::Flag(manual.map(|m| m.publish).unwrap_or(false)),
        ),
    ]
}

/// Manual administration and, with a role filter, the read-only manual
/// list a plain user sees from the sidebar.
#[component]
pub fn ManualsPage(
    #[prop(optional_no_strip)] filter: Option<(String, Vec<i64>)>,
    #[prop(optional)] read_only: bool,
) -> impl IntoView {
    let selected_manual: RwSignal<Option<Manual>> = RwSignal::new(None);
    let selected_section: RwSignal<Option<ManualSection>> = RwSignal::new(None);

    let filter = StoredValue::new(filter);

    let open_manual = Callback::new(move |manual: Manual| selected_manual.set(Some(manual)));
    let open_section =
        Callback::new(move |section: ManualSection| selected_section.set(Some(section)));
    let back_to_list = Callback::new(move |()| {
        selected_section.set(None);
        selected_manual.set(None);
    });
    let back_to_manual = Callback::new(move |()| selected_section.set(None));

    move || match (selected_manual.get(), selected_section.get()) {
        (Some(manual), Some(section)) => view! {
            <ContentList manual=manual section=section read_only=read_only on_back=back_to_manual />
        }
        .into_any(),
        (Some(manual), None) => view! {
            <ManualDetail
                manual=manual
                read_only=read_only
                on_open=open_section
                on_back=back_to_list
            />
        }
        .into_any(),
        (None, _) => {
            let delete = (!read_only).then(|| {
                DeleteSpec::new(
                    |m: &Manual| api_url(&format!("/api/manual/{}", m.id)),
                    |m: &Manual| format!("Delete manual \"{}\"?", m.title),
                    "Delete manual",
                    "Manual deleted",
                )
                .allowed_when(|m: &Manual| !m.prevent_delete)
            });
            view! {
                <div class="page">
                    <h1 class="page__title">"Manuals"</h1>
                    <DynamicDataTable
                        base_path="/api/manual".to_string()
                        columns=manual_columns()
                        fields=manual_fields(None)
                        create_label="New manual"
                        on_row_click=Some(open_manual)
                        delete=delete
                        default_sort=Some("priority")
                        filter=filter.get_value()
                        searchable=true
                        read_only=read_only
                    />
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ManualDetail(
    manual: Manual,
    read_only: bool,
    on_open: Callback<ManualSection>,
    on_back: Callback<()>,
) -> impl IntoView {
    let manual_id = manual.id;
    let locked = manual.prevent_edit || read_only;
    let delete = DeleteSpec::new(
        move |s: &ManualSection| api_url(&format!("/api/manual/{}/section/{}", manual_id, s.id)),
        |s: &ManualSection| format!("Delete section \"{}\"?", s.title),
        "Delete section",
        "Section deleted",
    );

    view! {
        <div class="page">
            <button class="button button--icon page__back" on:click=move |_| on_back.run(())>
                {icon("arrow-left")}
            </button>
            <h1 class="page__title">{manual.title.clone()}</h1>
            {manual
                .description
                .clone()
                .map(|text| view! { <p class="page__description">{text}</p> })}
            {(!locked).then(|| view! {
                <DynamicForm
                    fields=manual_fields(Some(&manual))
                    url=api_url(&format!("/api/manual/{}", manual_id))
                    method=Method::Put
                    submit_label="Update".to_string()
                />
            })}
            <h3 class="page__subtitle">"Sections"</h3>
            <SectionList
                list_path=format!("/api/manual/{}/section", manual_id)
                fields=vec![FieldSpec::text("title", "Title").required()]
                columns=vec![Column::new("Title", |s: &ManualSection| s.title.clone())]
                delete=delete
                create_label="Add section"
                on_open=Some(on_open)
                prevent_edit=locked
                prevent_delete={manual.prevent_delete || read_only}
            />
        </div>
    }
}

#[component]
fn ContentList(
    manual: Manual,
    section: ManualSection,
    read_only: bool,
    on_back: Callback<()>,
) -> impl IntoView {
    let manual_id = manual.id;
    let section_id = section.id;
    let delete = DeleteSpec::new(
        move |c: &Content| {
            api_url(&format!(
                "/api/manual/{}/section/{}/content/{}",
                manual_id, section_id, c.id
            ))
        },
        |c: &Content| format!("Delete content \"{}\"?", c.title),
        "Delete content",
        "Content deleted",
    );

    view! {
        <div class="page">
            <button class="button button--icon page__back" on:click=move |_| on_back.run(())>
                {icon("arrow-left")}
            </button>
            <h1 class="page__title">{section.title.clone()}</h1>
            <SectionList
                list_path=format!("/api/manual/{}/section/{}/content", manual_id, section_id)
                fields=vec![
                    FieldSpec::text("title", "Title").required(),
                    FieldSpec::text("body", "Body"),
                ]
                columns=vec![
                    Column::new("Title", |c: &Content| c.title.clone()),
                    Column::new("Body", |c: &Content| c.body.clone().unwrap_or_default()),
                ]
                delete=delete
                create_label="Add content"
                prevent_edit={manual.prevent_edit || read_only}
                prevent_delete={manual.prevent_delete || read_only}
            />
        </div>
    }
}
