//! Polymorphic form-field renderer: one concrete editable control per
//! [`FieldKind`] variant.

use leptos::prelude::*;

use super::ui::{Checkbox, Input, RadioGroup, Select};
use crate::shared::forms::coerce::coerce_numeric;
use crate::shared::forms::{FieldKind, FieldState, FieldValue, InputType, SelectItem};

fn pairs(items: Vec<SelectItem>) -> Vec<(String, String)> {
    items.into_iter().map(|i| (i.value, i.label)).collect()
}

#[component]
pub fn FieldInput(field: FieldState, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let value = field.value;
    let error = field.error;
    let spec = field.spec;
    let name = spec.name;
    let label = spec.label;
    let text_value = Signal::derive(move || value.get().as_text().to_string());

    match spec.kind {
        FieldKind::Hidden => view! {
            <input type="hidden" name=name prop:value=move || value.get().as_text().to_string() />
        }
        .into_any(),

        FieldKind::Input(input_type) => {
            let on_input = Callback::new(move |raw: String| {
                // Numeric sub-type rejects non-numeric text as an empty
                // value instead of throwing.
                let next = if input_type == InputType::Number {
                    coerce_numeric(&raw)
                } else {
                    raw
                };
                value.set(FieldValue::Text(next));
            });
            view! {
                <Input
                    id=name.to_string()
                    label=label.to_string()
                    value=text_value
                    on_input=on_input
                    input_type=input_type.as_str().to_string()
                    error=error
                    disabled=disabled
                />
            }
            .into_any()
        }

        FieldKind::Select { items } => {
            let on_change = Callback::new(move |selected: String| {
                value.set(FieldValue::Text(selected));
            });
            view! {
                <Select
                    id=name.to_string()
                    label=label.to_string()
                    value=text_value
                    on_change=on_change
                    options=pairs(items)
                    error=error
                    disabled=disabled
                />
            }
            .into_any()
        }

        FieldKind::SingleCheckbox => {
            let checked = Signal::derive(move || matches!(value.get(), FieldValue::Flag(true)));
            let on_change = Callback::new(move |state: bool| {
                value.set(FieldValue::Flag(state));
            });
            view! {
                <Checkbox
                    id=name.to_string()
                    label=label.to_string()
                    checked=checked
                    on_change=on_change
                    disabled=disabled
                />
            }
            .into_any()
        }

        FieldKind::MultipleCheckbox { items } => view! {
            <div class="form__group form__multi-checkbox">
                <span class="form__label">{label}</span>
                {items.into_iter().map(|item| {
                    let item_value = item.value.clone();
                    let item_value_for_toggle = item.value.clone();
                    let checked = Signal::derive(move || match value.get() {
                        FieldValue::Many(selected) => selected.contains(&item_value),
                        _ => false,
                    });
                    let on_change = Callback::new(move |state: bool| {
                        let item_value = item_value_for_toggle.clone();
                        value.update(|current| {
                            if let FieldValue::Many(selected) = current {
                                if state {
                                    if !selected.contains(&item_value) {
                                        selected.push(item_value);
                                    }
                                } else {
                                    selected.retain(|v| v != &item_value);
                                }
                            }
                        });
                    });
                    view! {
                        <Checkbox
                            id=format!("{}-{}", name, item.value)
                            label=item.label
                            checked=checked
                            on_change=on_change
                            disabled=disabled
                        />
                    }
                }).collect_view()}
                {move || error.get().map(|e| view! {
                    <span class="form__error">{e}</span>
                })}
            </div>
        }
        .into_any(),

        FieldKind::Radio { items } => {
            let on_change = Callback::new(move |selected: String| {
                value.set(FieldValue::Text(selected));
            });
            view! {
                <RadioGroup
                    name=name.to_string()
                    label=label.to_string()
                    value=text_value
                    on_change=on_change
                    options=pairs(items)
                    error=error
                    disabled=disabled
                />
            }
            .into_any()
        }
    }
}
