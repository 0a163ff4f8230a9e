use leptos::prelude::*;

use contracts::domain::quiz::{Answer, Question, Quiz, QuizSection};

use crate::shared::api_utils::api_url;
use crate::shared::components::{Column, DeleteSpec, DynamicDataTable, DynamicForm, SectionList};
use crate::shared::date_utils::format_timestamp;
use crate::shared::forms::{FieldSpec, FieldValue};
use crate::shared::http::Method;
use crate::shared::icons::icon;

fn quiz_columns() -> Vec<Column<Quiz>> {
    vec![
        Column::new("Title", |q: &Quiz| q.title.clone()).sortable("title"),
        Column::new("Published", |q: &Quiz| {
            if q.publish { "Yes" } else { "No" }.to_string()
        }),
        Column::new("Created", |q: &Quiz| format_timestamp(q.created_at)).sortable("created_at"),
    ]
}

fn quiz_fields(quiz: Option<&Quiz>) -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("title", "Title")
            .required()
            .default_text(quiz.map(|q| q.title.clone()).unwrap_or_default()),
        FieldSpec::text("description", "Description")
            .default_text(quiz.and_then(|q| q.description.clone()).unwrap_or_default()),
        FieldSpec::checkbox("publish", "Published")
            .default_value(FieldValue::Flag(quiz.map(|q| q.publish).unwrap_or(false))),
    ]
}

/// Quiz authoring: quiz list, then sections, then questions, then the
/// answers of one question, each level one step deeper in the same
/// nested REST collection.
#[component]
pub fn QuizzesPage() -> impl IntoView {
    let selected_quiz: RwSignal<Option<Quiz>> = RwSignal::new(None);
    let selected_section: RwSignal<Option<QuizSection>> = RwSignal::new(None);
    let selected_question: RwSignal<Option<Question>> = RwSignal::new(None);

    let open_quiz = Callback::new(move |quiz: Quiz| selected_quiz.set(Some(quiz)));
    let open_section = Callback::new(move |section: QuizSection| {
        selected_section.set(Some(section));
    });
    let open_question = Callback::new(move |question: Question| {
        selected_question.set(Some(question));
    });
    let back_to_list = Callback::new(move |()| {
        selected_question.set(None);
        selected_section.set(None);
        selected_quiz.set(None);
    });
    let back_to_quiz = Callback::new(move |()| {
        selected_question.set(None);
        selected_section.set(None);
    });
    let back_to_section = Callback::new(move |()| selected_question.set(None));

    move || {
        match (
            selected_quiz.get(),
            selected_section.get(),
            selected_question.get(),
        ) {
            (Some(quiz), Some(section), Some(question)) => view! {
                <AnswerList quiz=quiz section=section question=question on_back=back_to_section />
            }
            .into_any(),
            (Some(quiz), Some(section), None) => view! {
                <QuestionList
                    quiz=quiz
                    section=section
                    on_open=open_question
                    on_back=back_to_quiz
                />
            }
            .into_any(),
            (Some(quiz), None, _) => view! {
                <QuizDetail quiz=quiz on_open=open_section on_back=back_to_list />
            }
            .into_any(),
            _ => {
                let delete = DeleteSpec::new(
                    |q: &Quiz| api_url(&format!("/api/quiz/{}", q.id)),
                    |q: &Quiz| format!("Delete quiz \"{}\"?", q.title),
                    "Delete quiz",
                    "Quiz deleted",
                )
                .allowed_when(|q: &Quiz| !q.prevent_delete);
                view! {
                    <div class="page">
                        <h1 class="page__title">"Quizzes"</h1>
                        <DynamicDataTable
                            base_path="/api/quiz".to_string()
                            columns=quiz_columns()
                            fields=quiz_fields(None)
                            create_label="New quiz"
                            on_row_click=Some(open_quiz)
                            delete=Some(delete)
                            default_sort=Some("title")
                            searchable=true
                        />
                    </div>
                }
                .into_any()
            }
        }
    }
}

#[component]
fn QuizDetail(quiz: Quiz, on_open: Callback<QuizSection>, on_back: Callback<()>) -> impl IntoView {
    let quiz_id = quiz.id;
    let delete = DeleteSpec::new(
        move |s: &QuizSection| api_url(&format!("/api/quiz/{}/section/{}", quiz_id, s.id)),
        |s: &QuizSection| format!("Delete section \"{}\"?", s.title),
        "Delete section",
        "Section deleted",
    );

    view! {
        <div class="page">
            <button class="button button--icon page__back" on:click=move |_| on_back.run(())>
                {icon("arrow-left")}
            </button>
            <h1 class="page__title">{quiz.title.clone()}</h1>
            {quiz
                .description
                .clone()
                .map(|text| view! { <p class="page__description">{text}</p> })}
            {(!quiz.prevent_edit).then(|| view! {
                <DynamicForm
                    fields=quiz_fields(Some(&quiz))
                    url=api_url(&format!("/api/quiz/{}", quiz_id))
                    method=Method::Put
                    submit_label="Update".to_string()
                />
            })}
            <h3 class="page__subtitle">"Sections"</h3>
            <SectionList
                list_path=format!("/api/quiz/{}/section", quiz_id)
                fields=vec![FieldSpec::text("title", "Title").required()]
                columns=vec![Column::new("Title", |s: &QuizSection| s.title.clone())]
                delete=delete
                create_label="Add section"
                on_open=Some(on_open)
                prevent_edit=quiz.prevent_edit
                prevent_delete=quiz.prevent_delete
            />
        </div>
    }
}

#[component]
fn QuestionList(
    quiz: Quiz,
    section: QuizSection,
    on_open: Callback<Question>,
    on_back: Callback<()>,
) -> impl IntoView {
    let quiz_id = quiz.id;
    let section_id = section.id;
    let delete = DeleteSpec::new(
        move |q: &Question| {
            api_url(&format!(
                "/api/quiz/{}/section/{}/question/{}",
                quiz_id, section_id, q.id
            ))
        },
        |q: &Question| format!("Delete question \"{}\"?", q.text),
        "Delete question",
        "Question deleted",
    );

    view! {
        <div class="page">
            <button class="button button--icon page__back" on:click=move |_| on_back.run(())>
                {icon("arrow-left")}
            </button>
            <h1 class="page__title">{section.title.clone()}</h1>
            <SectionList
                list_path=format!("/api/quiz/{}/section/{}/question", quiz_id, section_id)
                fields=vec![FieldSpec::text("text", "Question").required()]
                columns=vec![Column::new("Question", |q: &Question| q.text.clone())]
                delete=delete
                create_label="Add question"
                on_open=Some(on_open)
                prevent_edit=quiz.prevent_edit
                prevent_delete=quiz.prevent_delete
            />
        </div>
    }
}

#[component]
fn AnswerList(
    quiz: Quiz,
    section: QuizSection,
    question: Question,
    on_back: Callback<()>,
) -> impl IntoView {
    let quiz_id = quiz.id;
    let section_id = section.id;
    let question_id = question.id;
    let delete = DeleteSpec::new(
        move |a: &Answer| {
            api_url(&format!(
                "/api/quiz/{}/section/{}/question/{}/answer/{}",
                quiz_id, section_id, question_id, a.id
            ))
        },
        |a: &Answer| format!("Delete answer \"{}\"?", a.text),
        "Delete answer",
        "Answer deleted",
    );

    view! {
        <div class="page">
            <button class="button button--icon page__back" on:click=move |_| on_back.run(())>
                {icon("arrow-left")}
            </button>
            <h1 class="page__title">{question.text.clone()}</h1>
            <SectionList
                list_path=format!(
                    "/api/quiz/{}/section/{}/question/{}/answer",
                    quiz_id, section_id, question_id
                )
                fields=vec![
                    FieldSpec::text("text", "Answer").required(),
                    FieldSpec::checkbox("correct", "Correct"),
                ]
                columns=vec![
                    Column::new("Answer", |a: &Answer| a.text.clone()),
                    Column::new("Correct", |a: &Answer| {
                        if a.correct { "Yes" } else { "No" }.to_string()
                    }),
                ]
                delete=delete
                create_label="Add answer"
                prevent_edit=quiz.prevent_edit
                prevent_delete=quiz.prevent_delete
            />
        </div>
    }
}
