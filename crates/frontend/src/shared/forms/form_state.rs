//! Signal-backed form state: one value and one inline error per field,
//! created from defaults on mount, reset on demand.

use std::sync::Arc;

use leptos::prelude::*;
use serde_json::Value;

use super::coerce::payload_value;
use super::{validate_field, FieldSpec, FieldValue};

#[derive(Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: RwSignal<FieldValue>,
    pub error: RwSignal<Option<String>>,
}

impl FieldState {
    fn new(spec: FieldSpec) -> Self {
        let value = RwSignal::new(spec.default.clone());
        Self {
            spec,
            value,
            error: RwSignal::new(None),
        }
    }

    /// Re-validate against the current value, surfacing the error inline.
    pub fn validate(&self) -> bool {
        let result = validate_field(&self.spec, &self.value.get_untracked());
        let ok = result.is_none();
        self.error.set(result);
        ok
    }

    pub fn reset(&self) {
        self.value.set(self.spec.default.clone());
        self.error.set(None);
    }
}

/// The aggregate handle `DynamicForm` works through. Cheap to clone into
/// submit futures.
#[derive(Clone)]
pub struct FormHandle {
    fields: Arc<Vec<FieldState>>,
}

impl FormHandle {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self {
            fields: Arc::new(specs.into_iter().map(FieldState::new).collect()),
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    /// Validate every field (not short-circuiting, so each shows its own
    /// error). Returns false when any field blocks submission.
    pub fn validate_all(&self) -> bool {
        let mut ok = true;
        for field in self.fields.iter() {
            if !field.validate() {
                ok = false;
            }
        }
        ok
    }

    /// Assemble the submit payload, applying per-field coercion.
    pub fn payload(&self) -> Value {
        let mut object = serde_json::Map::new();
        for field in self.fields.iter() {
            let value = field.value.get_untracked();
            object.insert(
                field.spec.name.to_string(),
                payload_value(field.spec.coerce, &value),
            );
        }
        Value::Object(object)
    }

    pub fn reset(&self) {
        for field in self.fields.iter() {
            field.reset();
        }
    }

    pub fn clear_errors(&self) {
        for field in self.fields.iter() {
            field.error.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::SelectItem;
    use serde_json::json;

    fn sample() -> FormHandle {
        FormHandle::new(vec![
            FieldSpec::text("name", "Name").required(),
            FieldSpec::number("priority", "Priority"),
            FieldSpec::multi(
                "role_ids",
                "Roles",
                vec![SelectItem::new("1", "A"), SelectItem::new("2", "B")],
            )
            .coerce(crate::shared::forms::Coerce::Numeric),
        ])
    }

    #[test]
    fn invalid_form_blocks_and_marks_fields() {
        let form = sample();
        assert!(!form.validate_all());
        assert!(form.fields()[0].error.get_untracked().is_some());
        // Optional fields stay clean.
        assert!(form.fields()[1].error.get_untracked().is_none());
    }

    #[test]
    fn payload_applies_coercion() {
        let form = sample();
        form.fields()[0].value.set(FieldValue::Text("Ada".into()));
        form.fields()[1].value.set(FieldValue::Text("3".into()));
        form.fields()[2]
            .value
            .set(FieldValue::Many(vec!["1".into(), "2".into()]));
        assert!(form.validate_all());
        assert_eq!(
            form.payload(),
            json!({"name": "Ada", "priority": 3, "role_ids": [1, 2]})
        );
    }

    #[test]
    fn reset_restores_defaults_and_clears_errors() {
        let form = sample();
        form.fields()[0].value.set(FieldValue::Text("Ada".into()));
        form.fields()[1].error.set(Some("stale".into()));
        form.reset();
        assert_eq!(
            form.fields()[0].value.get_untracked(),
            FieldValue::Text(String::new())
        );
        assert!(form.fields()[0].error.get_untracked().is_none());
        assert!(form.fields()[1].error.get_untracked().is_none());
    }
}
