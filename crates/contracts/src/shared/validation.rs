//! Client-side validation rules for form fields.
//!
//! A violated rule blocks submission before any network call is made.

/// Validation rules for a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub email: bool,
    pub numeric: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints.
    pub const fn none() -> Self {
        Self {
            required: false,
            email: false,
            numeric: false,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            email: false,
            numeric: false,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub const fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Validate a raw string value. Optional fields accept the empty
    /// string; format rules only apply once something was entered.
    pub fn validate_str(&self, value: &str, label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", label));
            }
            return Ok(());
        }
        if self.email && !is_valid_email(trimmed) {
            return Err(format!("{} must be a valid email address", label));
        }
        if self.numeric && trimmed.parse::<f64>().is_err() {
            return Err(format!("{} must be a number", label));
        }
        if let Some(min) = self.min_length {
            if trimmed.len() < min {
                return Err(format!("{} must be at least {} characters", label, min));
            }
        }
        if let Some(max) = self.max_length {
            if trimmed.len() > max {
                return Err(format!("{} must be at most {} characters", label, max));
            }
        }
        Ok(())
    }
}

/// Minimal email shape check: one `@`, non-empty local part, a dot in the
/// domain that is not its first or last character, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(pos) => pos > 0 && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_str("", "Name").is_err());
        assert!(rules.validate_str("   ", "Name").is_err());
        assert!(rules.validate_str("Ada", "Name").is_ok());
    }

    #[test]
    fn optional_field_accepts_empty() {
        let rules = ValidationRules::none().email();
        assert!(rules.validate_str("", "Email").is_ok());
        assert!(rules.validate_str("not-an-email", "Email").is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn numeric_rule() {
        let rules = ValidationRules::required().numeric();
        assert!(rules.validate_str("41.5", "Priority").is_ok());
        assert!(rules.validate_str("-3", "Priority").is_ok());
        assert!(rules.validate_str("three", "Priority").is_err());
    }

    #[test]
    fn length_bounds() {
        let rules = ValidationRules::none().min_length(2).max_length(4);
        assert!(rules.validate_str("ab", "Code").is_ok());
        assert!(rules.validate_str("a", "Code").is_err());
        assert!(rules.validate_str("abcde", "Code").is_err());
    }
}
