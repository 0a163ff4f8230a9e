//! The shared `{message, severity}` outcome channel.
//!
//! One banner per page scope: every completed request replaces the
//! current alert (never stacks), the user can dismiss it, and navigation
//! away clears it.

use leptos::prelude::*;

use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "alert--success",
            Severity::Error => "alert--error",
            Severity::Warning => "alert--warning",
            Severity::Info => "alert--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub severity: Severity,
}

/// Context service owning the page's alert slot.
#[derive(Clone, Copy)]
pub struct AlertService {
    current: RwSignal<Option<Alert>>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn current(&self) -> ReadSignal<Option<Alert>> {
        self.current.read_only()
    }

    fn set(&self, severity: Severity, message: impl Into<String>) {
        self.current.set(Some(Alert {
            message: message.into(),
            severity,
        }));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.set(Severity::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.set(Severity::Error, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.set(Severity::Warning, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.set(Severity::Info, message);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

/// Banner for the current alert. Pages render exactly one of these.
#[component]
pub fn AlertBanner() -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not provided in context");

    view! {
        {move || alerts.current.get().map(|alert| view! {
            <div class=format!("alert {}", alert.severity.css_class()) role="alert">
                <span class="alert__message">{alert.message}</span>
                <button
                    class="alert__dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| alerts.dismiss()
                >
                    {icon("close")}
                </button>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_replace_instead_of_stacking() {
        let alerts = AlertService::new();
        alerts.error("first failure");
        alerts.success("Success");

        let current = alerts.current.get_untracked().unwrap();
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.message, "Success");
    }

    #[test]
    fn dismiss_clears_the_slot() {
        let alerts = AlertService::new();
        alerts.info("loading note");
        alerts.dismiss();
        assert!(alerts.current.get_untracked().is_none());
    }

    #[test]
    fn severity_maps_to_banner_class() {
        assert_eq!(Severity::Error.css_class(), "alert--error");
        assert_eq!(Severity::Warning.css_class(), "alert--warning");
    }
}
