//! Pagination component for navigating through pages of orders

use crate::state;
use crate::text;
use leptos::prelude::*;

/// Page label with previous/next buttons
///
/// It only asks for a page change; fetching is up to the caller.
#[component]
pub fn Pagination(
    /// Current page and page count
    pagination: state::Pagination,
    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let prev = pagination.prev();
    let next = pagination.next();

    view! {
        <div class="pagination mt-6 flex items-center justify-between border-t border-gray-200 pt-4">
            <div class="text-sm text-gray-500">{pagination.label()}</div>
            <div class="flex items-center gap-2">
                <button
                    class="pagination-btn btn-outline btn-sm"
                    disabled=prev.is_none()
                    on:click=move |_| {
                        if let Some(page) = prev {
                            on_page_change.run(page);
                        }
                    }
                >
                    {text::PREVIOUS}
                </button>
                <button
                    class="pagination-btn btn-outline btn-sm"
                    disabled=next.is_none()
                    on:click=move |_| {
                        if let Some(page) = next {
                            on_page_change.run(page);
                        }
                    }
                >
                    {text::NEXT}
                </button>
            </div>
        </div>
    }
}
