//! Greeting header with avatar and today's date

use crate::text;
use chrono::Local;
use leptos::prelude::*;
use orderdesk_core::format::{format_date_pl, initials};

/// Avatar, greeting and today's date
///
/// The avatar falls back to initials when the image fails to load.
#[component]
pub fn Header(
    /// Name to greet
    name: String,
    /// Avatar image URL
    avatar_url: String,
) -> impl IntoView {
    let greeting = text::greeting(&name);
    let fallback = initials(&name);
    let today = format_date_pl(Local::now().date_naive());
    let (image_failed, set_image_failed) = signal(false);

    view! {
        <div class="flex items-center gap-4">
            <span class="avatar relative flex h-12 w-12 shrink-0 overflow-hidden rounded-full bg-gray-100">
                {move || {
                    if image_failed.get() {
                        view! {
                            <span class="flex h-full w-full items-center justify-center text-sm font-medium">
                                {fallback.clone()}
                            </span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <img
                                class="aspect-square h-full w-full"
                                src=avatar_url.clone()
                                alt=name.clone()
                                on:error=move |_| set_image_failed.set(true)
                            />
                        }
                            .into_any()
                    }
                }}
            </span>
            <div>
                <h1 class="text-xl font-semibold text-gray-900">{greeting}</h1>
                <p class="text-sm text-gray-500">{today}</p>
            </div>
        </div>
    }
}
