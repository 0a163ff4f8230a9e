use std::collections::HashMap;

use leptos::prelude::*;
use web_sys::window;

/// Single-page navigation state: which screen key is active. The key is
/// mirrored into the `?page=` query parameter so a reload lands on the
/// same screen, without pulling in a router for a flat page set.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub active: RwSignal<String>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new("home".to_string()),
        }
    }

    pub fn activate(&self, key: &str) {
        log::debug!("navigate: {}", key);
        self.active.set(key.to_string());
    }

    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page") {
            self.active.set(page.clone());
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext not provided")
}
