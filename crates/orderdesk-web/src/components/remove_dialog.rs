//! Delete confirmation dialog

use crate::text;
use leptos::prelude::*;

/// Modal asking to confirm a delete
///
/// Renders only while `open`. The confirm button is disabled while `pending`.
#[component]
pub fn RemoveDialog(
    /// Whether the dialog is shown
    open: Signal<bool>,
    /// Whether the delete is running
    pending: Signal<bool>,
    /// Close without deleting
    on_cancel: Callback<()>,
    /// Run the delete
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
                <div
                    class="w-full max-w-md rounded-lg bg-white p-6 shadow-lg"
                    role="alertdialog"
                    aria-modal="true"
                >
                    <div class="flex flex-col items-start space-y-4">
                        <div class="flex h-10 w-10 items-center justify-center rounded-full bg-red-100 text-red-600">
                            "🗑"
                        </div>
                        <div class="space-y-2 text-start">
                            <h2 class="text-lg font-semibold">{text::REMOVE_TITLE}</h2>
                            <p class="text-sm text-gray-600">{text::REMOVE_PROMPT}</p>
                        </div>
                    </div>
                    <div class="flex gap-3 pt-4">
                        <button
                            class="btn-outline flex-1"
                            disabled=move || pending.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            {text::CANCEL}
                        </button>
                        <button
                            class="flex-1 bg-red-600 text-white hover:bg-red-700"
                            disabled=move || pending.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {text::REMOVE}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
