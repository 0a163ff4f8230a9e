//! Declarative field model behind `DynamicForm`.
//!
//! A field's kind is a sum type: a spec carries exactly one kind by
//! construction, and kinds that need an item list carry it inside their
//! variant, so a `Select` without items cannot be built at all.

pub mod coerce;
pub mod form_state;

pub use form_state::{FieldState, FormHandle};

use contracts::shared::validation::ValidationRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Number,
    Date,
    Email,
    Tel,
    Password,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Date => "date",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Password => "password",
        }
    }
}

/// Option for select/radio/multi-checkbox kinds: (wire value, label).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub value: String,
    pub label: String,
}

impl SelectItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Hidden,
    Input(InputType),
    Select { items: Vec<SelectItem> },
    SingleCheckbox,
    MultipleCheckbox { items: Vec<SelectItem> },
    Radio { items: Vec<SelectItem> },
}

/// Current value of a bound field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Many(Vec<String>),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(checked) => !checked,
            FieldValue::Many(values) => values.is_empty(),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }
}

/// Value coercion applied when the form payload is assembled.
#[derive(Clone, Copy)]
pub enum Coerce {
    None,
    Numeric,
    Date,
    Custom(fn(&FieldValue) -> serde_json::Value),
}

/// Declarative description of one form field.
#[derive(Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: FieldValue,
    pub rules: ValidationRules,
    pub coerce: Coerce,
}

impl FieldSpec {
    fn base(name: &'static str, label: &'static str, kind: FieldKind, default: FieldValue) -> Self {
        Self {
            name,
            label,
            kind,
            default,
            rules: ValidationRules::none(),
            coerce: Coerce::None,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::base(
            name,
            label,
            FieldKind::Input(InputType::Text),
            FieldValue::Text(String::new()),
        )
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        let mut spec = Self::base(
            name,
            label,
            FieldKind::Input(InputType::Email),
            FieldValue::Text(String::new()),
        );
        spec.rules = spec.rules.email();
        spec
    }

    pub fn tel(name: &'static str, label: &'static str) -> Self {
        Self::base(
            name,
            label,
            FieldKind::Input(InputType::Tel),
            FieldValue::Text(String::new()),
        )
    }

    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self::base(
            name,
            label,
            FieldKind::Input(InputType::Password),
            FieldValue::Text(String::new()),
        )
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        let mut spec = Self::base(
            name,
            label,
            FieldKind::Input(InputType::Number),
            FieldValue::Text(String::new()),
        );
        spec.rules = spec.rules.numeric();
        spec.coerce = Coerce::Numeric;
        spec
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        let mut spec = Self::base(
            name,
            label,
            FieldKind::Input(InputType::Date),
            FieldValue::Text(String::new()),
        );
        spec.coerce = Coerce::Date;
        spec
    }

    pub fn hidden(name: &'static str, value: impl Into<String>) -> Self {
        Self::base(name, name, FieldKind::Hidden, FieldValue::Text(value.into()))
    }

    pub fn select(name: &'static str, label: &'static str, items: Vec<SelectItem>) -> Self {
        Self::base(
            name,
            label,
            FieldKind::Select { items },
            FieldValue::Text(String::new()),
        )
    }

    pub fn radio(name: &'static str, label: &'static str, items: Vec<SelectItem>) -> Self {
        Self::base(
            name,
            label,
            FieldKind::Radio { items },
            FieldValue::Text(String::new()),
        )
    }

    pub fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::SingleCheckbox, FieldValue::Flag(false))
    }

    pub fn multi(name: &'static str, label: &'static str, items: Vec<SelectItem>) -> Self {
        Self::base(
            name,
            label,
            FieldKind::MultipleCheckbox { items },
            FieldValue::Many(Vec::new()),
        )
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    pub fn rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn coerce(mut self, coerce: Coerce) -> Self {
        self.coerce = coerce;
        self
    }

    pub fn default_value(mut self, default: FieldValue) -> Self {
        self.default = default;
        self
    }

    pub fn default_text(self, value: impl Into<String>) -> Self {
        self.default_value(FieldValue::Text(value.into()))
    }
}

/// Field-level validation. `None` means the value passes.
pub fn validate_field(spec: &FieldSpec, value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(text) => spec.rules.validate_str(text, spec.label).err(),
        FieldValue::Flag(checked) => {
            if spec.rules.required && !checked {
                Some(format!("{} is required", spec.label))
            } else {
                None
            }
        }
        FieldValue::Many(values) => {
            if spec.rules.required && values.is_empty() {
                Some(format!("{} is required", spec.label))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_blocks_blank() {
        let spec = FieldSpec::text("name", "Name").required();
        assert!(validate_field(&spec, &FieldValue::Text(String::new())).is_some());
        assert!(validate_field(&spec, &FieldValue::Text("Ada".into())).is_none());
    }

    #[test]
    fn email_format_is_enforced() {
        let spec = FieldSpec::email("email", "Email").required();
        assert!(validate_field(&spec, &FieldValue::Text("not-an-email".into())).is_some());
        assert!(validate_field(&spec, &FieldValue::Text("a@b.com".into())).is_none());
    }

    #[test]
    fn required_checkbox_must_be_checked() {
        let spec = FieldSpec::checkbox("accept", "Accept terms").required();
        assert!(validate_field(&spec, &FieldValue::Flag(false)).is_some());
        assert!(validate_field(&spec, &FieldValue::Flag(true)).is_none());
    }

    #[test]
    fn required_multi_needs_a_selection() {
        let spec = FieldSpec::multi("roles", "Roles", vec![SelectItem::new("1", "A")]).required();
        assert!(validate_field(&spec, &FieldValue::Many(vec![])).is_some());
        assert!(validate_field(&spec, &FieldValue::Many(vec!["1".into()])).is_none());
    }

    #[test]
    fn optional_fields_pass_empty() {
        let spec = FieldSpec::tel("phone", "Phone");
        assert!(validate_field(&spec, &FieldValue::Text(String::new())).is_none());
    }
}
