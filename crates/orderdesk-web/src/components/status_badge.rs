//! Status badge component

use leptos::prelude::*;
use orderdesk_core::OrderStatus;

/// Classes and label of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    /// Colour classes
    pub class: &'static str,
    /// Polish label
    pub label: &'static str,
}

const UNKNOWN: BadgeStyle = BadgeStyle {
    class: "bg-gray-100 text-gray-800 hover:bg-gray-100",
    label: "Status nieznany",
};

/// Badge for a status
pub const fn badge_for(status: OrderStatus) -> BadgeStyle {
    match status {
        OrderStatus::Delivered => BadgeStyle {
            class: "bg-green-100 text-green-800 hover:bg-green-100",
            label: "Dostarczono",
        },
        OrderStatus::Cancelled => BadgeStyle {
            class: "bg-red-100 text-red-800 hover:bg-red-100",
            label: "Anulowano",
        },
        OrderStatus::Processing => BadgeStyle {
            class: "bg-purple-100 text-purple-800 hover:bg-purple-100",
            label: "Przygotowanie",
        },
        OrderStatus::New => BadgeStyle {
            class: "bg-blue-100 text-blue-800 hover:bg-blue-100",
            label: "Nowe",
        },
        OrderStatus::Shipped => BadgeStyle {
            class: "bg-green-100 text-green-800 hover:bg-green-100",
            label: "Wysłane",
        },
        OrderStatus::Unknown => UNKNOWN,
    }
}

/// A rounded badge with a dot and the status label
#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    let style = badge_for(status);
    let class = format!(
        "inline-flex items-center gap-1 rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
        style.class
    );

    view! {
        <span class=class>
            <span class="h-1.5 w-1.5 rounded-full bg-current" aria-hidden="true"></span>
            {style.label}
        </span>
    }
}
