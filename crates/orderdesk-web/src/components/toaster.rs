//! Toast stack

use crate::state::{OrdersViewState, StateCell, ToastKind};
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use std::time::Duration;

/// Shows the notifications and dismisses each after `toast_seconds`
#[component]
pub fn Toaster(
    /// Page state holding the notifications
    state: RwSignal<OrdersViewState>,
    /// Seconds a toast stays on screen
    toast_seconds: u64,
) -> impl IntoView {
    let delay = Duration::from_secs(toast_seconds.max(1));

    // Toast ids only grow, so remembering the highest scheduled id is enough
    Effect::new(move |last: Option<u64>| {
        let last = last.unwrap_or(0);
        let fresh: Vec<u64> = state.with(|view| {
            view.notifications
                .toasts()
                .iter()
                .map(|toast| toast.id)
                .filter(|id| *id > last)
                .collect()
        });
        for &id in &fresh {
            set_timeout(
                move || {
                    state.mutate(|view| view.notifications.dismiss(id));
                },
                delay,
            );
        }
        fresh.into_iter().max().unwrap_or(last)
    });

    view! {
        <div class="toaster fixed bottom-4 right-4 z-50 flex flex-col gap-2" aria-live="polite">
            {move || {
                state
                    .with(|view| view.notifications.toasts().to_vec())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast rounded-md bg-white px-4 py-3 text-sm text-green-800 shadow",
                            ToastKind::Error => "toast rounded-md bg-white px-4 py-3 text-sm text-red-800 shadow",
                        };
                        view! {
                            <div class=class role="status">
                                <span>{toast.message}</span>
                                <button
                                    class="ml-3 text-gray-400 hover:text-gray-600"
                                    aria-label="Zamknij"
                                    on:click=move |_| state.update(|view| view.notifications.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
