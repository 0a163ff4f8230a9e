use leptos::prelude::*;

/// Radio group component: one named group, one selected value.
#[component]
pub fn RadioGroup(
    /// Label for the whole group (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Shared `name` attribute tying the radios together
    #[prop(into)]
    name: String,
    /// Currently selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options as (value, label) pairs; fixed for the life of the control
    options: Vec<(String, String)>,
    /// Inline validation error
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let group_name = StoredValue::new(name);

    view! {
        <div class="form__group form__radio-group" role="radiogroup">
            {move || label.get().map(|l| view! {
                <span class="form__label">{l}</span>
            })}
            {options.into_iter().map(|(val, item_label)| {
                let val_for_checked = val.clone();
                let val_for_change = val.clone();
                let radio_id = format!("{}-{}", group_name.get_value(), val);
                let radio_id_for_label = radio_id.clone();
                view! {
                    <div class="form__radio-wrapper">
                        <input
                            id=radio_id
                            type="radio"
                            class="form__radio"
                            name=group_name.get_value()
                            value=val
                            prop:checked=move || value.get() == val_for_checked
                            disabled=move || disabled.get()
                            on:change=move |_| {
                                if let Some(handler) = on_change {
                                    handler.run(val_for_change.clone());
                                }
                            }
                        />
                        <label class="form__radio-label" for=radio_id_for_label>
                            {item_label}
                        </label>
                    </div>
                }
            }).collect_view()}
            {move || error.get().map(|e| view! {
                <span class="form__error">{e}</span>
            })}
        </div>
    }
}
