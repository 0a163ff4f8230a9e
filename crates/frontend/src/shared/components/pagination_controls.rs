use leptos::prelude::*;

use crate::shared::icons::icon;

/// Pager bar: first/prev, a "page / pages (count)" readout, next/last,
/// and a page-size selector. Pages are 0-indexed at the prop boundary.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(default = vec![10, 25, 50, 100])] page_size_options: Vec<usize>,
) -> impl IntoView {
    let last_page = move || total_pages.get().saturating_sub(1);
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() >= last_page();
    let go = move |target: usize| on_page_change.run(target);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=at_start
                on:click=move |_| go(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=at_start
                on:click=move |_| go(current_page.get().saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get() + 1,
                    total_pages.get().max(1),
                    total_count.get(),
                )}
            </span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=at_end
                on:click=move |_| {
                    if !at_end() {
                        go(current_page.get() + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=at_end
                on:click=move |_| go(last_page())
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {page_size_options
                    .into_iter()
                    .map(|size| view! {
                        <option
                            value=size.to_string()
                            selected=move || page_size.get() == size
                        >
                            {size.to_string()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
