//! Loading component for displaying loading states

use crate::text;
use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading flex items-center gap-2 py-8 text-sm text-gray-500" role="status">
            <div class="spinner h-4 w-4 animate-spin rounded-full border-2 border-gray-300 border-t-purple-600"></div>
            <p>{text::LOADING}</p>
        </div>
    }
}
