use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::session::{api, SessionState, use_session};

/// Client-side gate for the entry form; nothing reaches the network
/// while this returns a message.
fn entry_error(registering: bool, name: &str, email: &str, password: &str) -> Option<&'static str> {
    if registering && name.trim().is_empty() {
        return Some("Name is required");
    }
    if email.trim().is_empty() || password.is_empty() {
        return Some("Email and password are required");
    }
    None
}

/// Public entry screen: sign-in plus self-service registration. Either
/// path swaps the whole shell in by populating the session context.
#[component]
pub fn LandingPage() -> impl IntoView {
    let (_, set_session) = use_session();

    let (registering, set_registering) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let signup = registering.get_untracked();
        let full_name = name.get_untracked();
        let user = email.get_untracked();
        let pass = password.get_untracked();
        if let Some(message) = entry_error(signup, &full_name, &user, &pass) {
            set_error_message.set(Some(message.to_string()));
            return;
        }
        set_error_message.set(None);
        set_busy.set(true);
        spawn_local(async move {
            let outcome = if signup {
                api::register(full_name, user, pass).await
            } else {
                api::login(user, pass).await
            };
            match outcome {
                Ok(info) => set_session.set(SessionState {
                    probed: true,
                    info: Some(info),
                }),
                Err(err) => {
                    if !err.is_abort() {
                        set_error_message.set(Some(err.to_string()));
                    }
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="landing">
            <div class="landing__panel">
                <h1 class="landing__title">"Welcome OnBoard"</h1>
                <p class="landing__subtitle">
                    {move || if registering.get() {
                        "Create your account"
                    } else {
                        "Sign in to continue"
                    }}
                </p>
                <Show when=move || error_message.get().is_some()>
                    <div class="landing__error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <form class="form landing__form" on:submit=on_submit>
                    <Show when=move || registering.get()>
                        <div class="form__group">
                            <label class="form__label" for="register-name">"Name"</label>
                            <input
                                id="register-name"
                                type="text"
                                class="form__input"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </div>
                    </Show>
                    <div class="form__group">
                        <label class="form__label" for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            class="form__input"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            class="form__input"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </div>
                    <button
                        type="submit"
                        class="button button--primary landing__submit"
                        disabled=move || busy.get()
                    >
                        {move || match (registering.get(), busy.get()) {
                            (false, false) => "Sign in",
                            (false, true) => "Signing in...",
                            (true, false) => "Create account",
                            (true, true) => "Creating account...",
                        }}
                    </button>
                </form>
                <button
                    type="button"
                    class="landing__mode-toggle"
                    disabled=move || busy.get()
                    on:click=move |_| {
                        set_error_message.set(None);
                        set_registering.update(|r| *r = !*r);
                    }
                >
                    {move || if registering.get() {
                        "Back to sign in"
                    } else {
                        "New here? Create an account"
                    }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::entry_error;

    #[test]
    fn sign_in_requires_email_and_password() {
        assert!(entry_error(false, "", "", "pw").is_some());
        assert!(entry_error(false, "", "a@b.com", "").is_some());
        assert!(entry_error(false, "", "a@b.com", "pw").is_none());
    }

    #[test]
    fn registration_also_requires_a_name() {
        assert!(entry_error(true, "  ", "a@b.com", "pw").is_some());
        assert!(entry_error(true, "Ada", "a@b.com", "pw").is_none());
    }
}
