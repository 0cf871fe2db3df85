//! Orders card: totals, column menu, table, row actions and pagination

use super::{AddOrderModal, Loading, Pagination, RemoveDialog, SharedApi, StatusBadge, spawn_with_api};
use crate::actions;
use crate::state::{Column, OrdersViewState};
use crate::text;
use leptos::prelude::*;
use orderdesk_core::format::format_date_pl;
use orderdesk_core::{CurrencyConfig, Order};

/// One table cell
fn cell(column: Column, order: &Order, currency: &CurrencyConfig) -> AnyView {
    match column {
        Column::OrderNumber => view! {
            <td class="px-4 py-3 text-sm font-medium text-gray-900">{order.order_number.clone()}</td>
        }
        .into_any(),
        Column::DueDate => view! {
            <td class="px-4 py-3 text-sm text-gray-600">{format_date_pl(order.due_date)}</td>
        }
        .into_any(),
        Column::Customer => view! {
            <td class="px-4 py-3 text-sm text-gray-900">{order.customer.clone()}</td>
        }
        .into_any(),
        Column::Status => view! {
            <td class="px-4 py-3"><StatusBadge status=order.status /></td>
        }
        .into_any(),
        Column::TotalGross => {
            let amount = currency.display_amount(order.total_gross);
            view! {
                <td class="px-4 py-3 text-sm text-gray-900" title=amount.warning>{amount.text}</td>
            }
            .into_any()
        }
    }
}

/// "Konfiguruj widok" dropdown with one checkbox per column
#[component]
fn ColumnMenu(state: RwSignal<OrdersViewState>) -> impl IntoView {
    view! {
        <details class="relative">
            <summary class="btn-outline cursor-pointer list-none">{text::CONFIGURE_VIEW}</summary>
            <div class="absolute right-0 z-10 mt-2 w-56 rounded-md border bg-white p-2 shadow">
                {Column::ALL
                    .into_iter()
                    .map(|column| {
                        view! {
                            <label class="flex items-center gap-2 px-2 py-1 text-sm">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|view| view.columns.is_visible(column))
                                    on:change=move |_| state.update(|view| view.toggle_column(column))
                                />
                                {column.label()}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </details>
    }
}

/// Table of the loaded page
#[component]
fn OrdersTable(state: RwSignal<OrdersViewState>, currency: CurrencyConfig) -> impl IntoView {
    move || {
        let (orders, columns, checked) = state.with(|view| {
            let orders = view.list.orders().to_vec();
            let checked: Vec<bool> = orders
                .iter()
                .map(|order| view.selection.contains(&order.id))
                .collect();
            (orders, view.columns.visible(), checked)
        });

        if orders.is_empty() {
            return view! { <p class="py-8 text-center text-sm text-gray-500">{text::NO_ORDERS}</p> }
                .into_any();
        }

        let header = columns
            .iter()
            .map(|column| {
                view! {
                    <th class="px-4 py-3 text-left text-xs font-medium uppercase text-gray-500">
                        {column.label()}
                    </th>
                }
            })
            .collect::<Vec<_>>();

        let rows = orders
            .into_iter()
            .zip(checked)
            .map(|(order, is_checked)| {
                let toggle_id = order.id.clone();
                let remove_id = order.id.clone();
                let cells = columns
                    .iter()
                    .map(|column| cell(*column, &order, &currency))
                    .collect::<Vec<_>>();
                view! {
                    <tr class="border-b hover:bg-gray-50">
                        <td class="w-10 px-4 py-3">
                            <input
                                type="checkbox"
                                prop:checked=is_checked
                                on:change=move |_| state.update(|view| view.toggle_select(&toggle_id))
                            />
                        </td>
                        {cells}
                        <td class="w-10 px-4 py-3 text-right">
                            <details class="relative">
                                <summary class="cursor-pointer list-none text-gray-400" aria-label="Akcje">"⋯"</summary>
                                <div class="absolute right-0 z-10 mt-2 w-48 rounded-md border bg-white p-1 shadow">
                                    <button
                                        class="w-full px-2 py-1 text-left text-sm text-red-600 hover:bg-gray-50"
                                        on:click=move |_| state.update(|view| view.request_removal(&remove_id))
                                    >
                                        {text::REMOVE_ROW}
                                    </button>
                                </div>
                            </details>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <table class="w-full">
                <thead>
                    <tr class="border-b">
                        <th class="w-10 px-4 py-3">
                            <input
                                type="checkbox"
                                aria-label="Zaznacz wszystkie"
                                prop:checked=move || state.with(OrdersViewState::all_selected)
                                on:change=move |_| state.update(OrdersViewState::toggle_select_all)
                            />
                        </th>
                        {header}
                        <th class="w-10"></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    }
}

/// The orders card
///
/// Fetches the first page on mount. Page changes, deletes and created orders
/// all re-fetch through [`crate::actions`].
#[component]
pub fn OrdersView(
    /// Page state
    state: RwSignal<OrdersViewState>,
    /// Client for the orders endpoints
    api: SharedApi,
    /// Amount display settings
    currency: CurrencyConfig,
) -> impl IntoView {
    spawn_with_api(api, move |client| async move {
        actions::refresh(&client, &state).await;
    });

    let on_page_change = Callback::new(move |page: u32| {
        spawn_with_api(api, move |client| async move {
            actions::change_page(&client, &state, page).await;
        });
    });
    let on_created = Callback::new(move |()| {
        spawn_with_api(api, move |client| async move {
            actions::refresh(&client, &state).await;
        });
    });
    let on_confirm = Callback::new(move |()| {
        spawn_with_api(api, move |client| async move {
            actions::confirm_removal(&client, &state).await;
        });
    });
    let on_cancel = Callback::new(move |()| state.update(|view| view.removal.cancel()));
    let removal_open = Signal::derive(move || state.with(|view| view.removal.is_open()));
    let removal_pending = Signal::derive(move || state.with(|view| view.removal.is_pending()));

    view! {
        <div class="card rounded-lg border bg-white shadow-sm">
            <div class="flex items-start justify-between p-6">
                <div>
                    <h2 class="text-lg font-medium text-gray-900">{text::ORDERS_TITLE}</h2>
                    <div class="mt-2">
                        <div class="text-3xl font-bold text-gray-900">
                            {move || state.with(|view| view.list.total())}
                        </div>
                        <div class="text-sm text-gray-500">{text::ORDERS_TOTAL}</div>
                    </div>
                </div>
                <div class="flex items-center gap-3">
                    <ColumnMenu state />
                    <button
                        class="btn-primary bg-purple-600 text-white hover:bg-purple-700"
                        on:click=move |_| state.update(OrdersViewState::open_add_form)
                    >
                        {text::ADD_ORDER}
                    </button>
                </div>
            </div>
            <div class="px-6 pb-6">
                <div class="relative overflow-x-auto">
                    <Show when=move || state.with(|view| view.list.is_loading())>
                        <Loading />
                    </Show>
                    <OrdersTable state currency />
                </div>
                {move || {
                    let pagination = state.with(OrdersViewState::pagination);
                    view! { <Pagination pagination on_page_change /> }
                }}
            </div>
        </div>
        <AddOrderModal state api on_created />
        <RemoveDialog open=removal_open pending=removal_pending on_cancel on_confirm />
    }
}
