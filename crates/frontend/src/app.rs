use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::alert::AlertService;
use crate::shared::modal::ModalService;
use crate::system::session::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AlertService::new());
    provide_context(ModalService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
