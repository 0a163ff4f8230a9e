use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::system::session::SessionInfo;

use super::api;

/// Root-level view of the cookie session. `probed` stays false until
/// the mount-time probe has answered either way, so the shell can avoid
/// flashing the landing page at a signed-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub probed: bool,
    pub info: Option<SessionInfo>,
}

impl SessionState {
    pub fn signed_in(&self) -> bool {
        self.info.is_some()
    }

    pub fn is_elevated(&self) -> bool {
        self.info.as_ref().is_some_and(SessionInfo::is_elevated)
    }
}

pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let read = use_context::<ReadSignal<SessionState>>().expect("SessionState not provided");
    let write = use_context::<WriteSignal<SessionState>>().expect("SessionState not provided");
    (read, write)
}

/// Provides the session signals and fires the one-time probe.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());
    provide_context(session);
    provide_context(set_session);

    spawn_local(async move {
        match api::probe().await {
            Ok(info) => set_session.set(SessionState {
                probed: true,
                info: Some(info),
            }),
            Err(err) => {
                if !err.is_abort() {
                    log::debug!("session probe: {}", err);
                }
                set_session.set(SessionState {
                    probed: true,
                    info: None,
                });
            }
        }
    });

    children()
}
