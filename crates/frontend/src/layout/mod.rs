pub mod nav_context;
mod sidebar;
mod top_header;

use leptos::prelude::*;

use crate::shared::alert::AlertBanner;
pub use nav_context::{NavContext, use_nav};
use sidebar::Sidebar;
use top_header::TopHeader;

/// Signed-in chrome: top bar, sidebar and the content column with the
/// page-level alert banner above whatever screen is active.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-layout__body">
                <Sidebar />
                <main class="app-layout__main">
                    <AlertBanner />
                    {children()}
                </main>
            </div>
        </div>
    }
}
