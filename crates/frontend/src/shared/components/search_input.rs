use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Debounced search box. Keystrokes echo into a local draft immediately;
/// `on_change` fires only after the user pauses, and a newer keystroke
/// cancels the older timer.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (draft, set_draft) = signal(None::<String>);
    let pending = StoredValue::new(0u64);

    let display = move || draft.get().unwrap_or_else(|| value.get());

    let handle_input = move |ev| {
        let text = event_target_value(&ev);
        set_draft.set(Some(text.clone()));
        let token = pending.get_value() + 1;
        pending.set_value(token);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if pending.get_value() == token {
                on_change.run(text);
                set_draft.set(None);
            }
        });
    };

    let clear = move |_| {
        pending.set_value(pending.get_value() + 1);
        set_draft.set(None);
        on_change.run(String::new());
    };

    view! {
        <div class="search">
            <span class="search__icon">{icon("search")}</span>
            <input
                type="text"
                class="search__input"
                placeholder=move || {
                    placeholder
                        .get()
                        .unwrap_or_else(|| "Search (min. 3 characters)".to_string())
                }
                prop:value=display
                on:input=handle_input
            />
            <Show when=move || !display().is_empty()>
                <button class="search__clear" on:click=clear>
                    {icon("close")}
                </button>
            </Show>
        </div>
    }
}
