use leptos::prelude::*;

/// Labelled text input with an inline validation message slot.
#[component]
pub fn Input(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// "text", "email", "tel", "password", "number" or "date".
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let kind = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let control_class = move || match error.get() {
        Some(_) => "form__input form__input--error",
        None => "form__input",
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <input
                id=id
                type=kind
                class=control_class
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}
