use leptos::prelude::*;

/// Labelled dropdown over a fixed `(value, text)` option list. An empty
/// leading option stands for "nothing chosen".
#[component]
pub fn Select(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <select
                id=id
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    "Select..."
                </option>
                {options
                    .into_iter()
                    .map(|(option_value, text)| {
                        let current = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == current
                            >
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || error.get().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}
