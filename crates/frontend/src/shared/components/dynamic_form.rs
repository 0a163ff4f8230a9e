use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::alert::AlertService;
use crate::shared::components::field_input::FieldInput;
use crate::shared::forms::{FieldSpec, FormHandle};
use crate::shared::http::{self, Method};
use crate::shared::icons::icon;

/// Declarative form: renders one control per field spec, validates every
/// field on submit and sends the coerced payload to `url`. Invalid fields
/// block the request; a rejected request keeps the user's input.
#[component]
pub fn DynamicForm(
    fields: Vec<FieldSpec>,
    url: String,
    method: Method,
    #[prop(optional, into)] submit_label: MaybeProp<String>,
    #[prop(optional)] reset_on_submit: bool,
    #[prop(optional)] on_saved: Option<Callback<()>>,
) -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not provided");
    let form = FormHandle::new(fields);
    let (busy, set_busy) = signal(false);
    let url = StoredValue::new(url);

    let form_for_submit = form.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if !form_for_submit.validate_all() {
            return;
        }
        let payload = form_for_submit.payload();
        let target = url.get_value();
        let form_async = form_for_submit.clone();
        set_busy.set(true);
        spawn_local(async move {
            match http::send_json(method, &target, &payload).await {
                Ok(()) => {
                    alerts.success("Success");
                    if reset_on_submit {
                        form_async.reset();
                    }
                    if let Some(cb) = on_saved {
                        cb.run(());
                    }
                }
                Err(err) if !err.is_abort() => alerts.error(err.to_string()),
                Err(_) => {}
            }
            set_busy.set(false);
        });
    };

    let inputs = form
        .fields()
        .iter()
        .map(|field| {
            view! { <FieldInput field=field.clone() disabled=busy /> }
        })
        .collect_view();

    view! {
        <form class="form" on:submit=on_submit>
            {inputs}
            <button type="submit" class="button button--primary" disabled=move || busy.get()>
                {icon("save")}
                {move || submit_label.get().unwrap_or_else(|| "Save".to_string())}
            </button>
        </form>
    }
}
