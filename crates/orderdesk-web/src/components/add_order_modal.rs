//! Add-order modal

use super::status_badge::badge_for;
use super::{SharedApi, spawn_with_api};
use crate::actions::{self, SubmitOutcome};
use crate::state::{FormField, OrdersViewState};
use crate::text;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use orderdesk_core::OrderStatus;

const fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Customer => "Podaj nazwę klienta",
        FormField::OrderNumber => "Podaj Numer zamówienia",
        FormField::TotalGross => "Podaj kwotę brutto zamówienia",
        FormField::Status | FormField::DueDate => "",
    }
}

const fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::DueDate => "date",
        _ => "text",
    }
}

/// Inline message under an input
fn field_error(state: RwSignal<OrdersViewState>, field: FormField) -> impl IntoView {
    move || {
        state
            .with(|view| view.add_form.error(field).map(str::to_string))
            .map(|message| view! { <p class="text-sm text-red-600">{message}</p> })
    }
}

/// Labelled text or date input bound to one draft field
#[component]
fn DraftInput(state: RwSignal<OrdersViewState>, field: FormField) -> impl IntoView {
    let id = format!("add-order-{}", field.wire_name());

    view! {
        <div class="space-y-2">
            <label class="text-sm font-medium" for=id.clone()>{field.label()}</label>
            <input
                id=id
                class="input w-full"
                type=input_type(field)
                inputmode=(field == FormField::TotalGross).then_some("decimal")
                placeholder=placeholder(field)
                prop:value=move || state.with(|view| view.add_form.draft().value(field))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|view| view.add_form.set(field, &value));
                }
            />
            {field_error(state, field)}
        </div>
    }
}

/// Modal form for creating an order
///
/// `on_created` runs after the order was accepted so the caller can refresh.
#[component]
pub fn AddOrderModal(
    /// Page state holding the form
    state: RwSignal<OrdersViewState>,
    /// Client used to submit
    api: SharedApi,
    /// Runs after a successful submit
    on_created: Callback<()>,
) -> impl IntoView {
    let submitting = move || state.with(|view| view.add_form.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_with_api(api, move |client| async move {
            if actions::submit_order(&client, &state).await == SubmitOutcome::Created {
                on_created.run(());
            }
        });
    };

    view! {
        <Show when=move || state.with(|view| view.add_form.is_open())>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
                <div class="w-full max-w-lg rounded-lg bg-white p-6 shadow-lg" role="dialog" aria-modal="true">
                    <h2 class="mb-4 text-lg font-semibold">{text::ADD_ORDER}</h2>
                    <form class="space-y-4" on:submit=on_submit novalidate=true>
                        <DraftInput state field=FormField::Customer />
                        <DraftInput state field=FormField::OrderNumber />
                        <div class="space-y-2">
                            <label class="text-sm font-medium" for="add-order-status">
                                {FormField::Status.label()}
                            </label>
                            <select
                                id="add-order-status"
                                class="input w-full"
                                prop:value=move || state.with(|view| view.add_form.draft().value(FormField::Status))
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|view| view.add_form.set(FormField::Status, &value));
                                }
                            >
                                {OrderStatus::KNOWN
                                    .into_iter()
                                    .map(|status| {
                                        view! { <option value=status.as_str()>{badge_for(status).label}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                            {field_error(state, FormField::Status)}
                        </div>
                        <DraftInput state field=FormField::DueDate />
                        <DraftInput state field=FormField::TotalGross />
                        <div class="flex justify-end gap-3 pt-2">
                            <button
                                type="button"
                                class="btn-outline"
                                disabled=submitting
                                on:click=move |_| state.update(OrdersViewState::close_add_form)
                            >
                                {text::CANCEL}
                            </button>
                            <button type="submit" class="btn-primary" disabled=submitting>
                                {text::SAVE}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_per_field() {
        assert_eq!(input_type(FormField::DueDate), "date");
        assert_eq!(input_type(FormField::TotalGross), "text");
        assert_eq!(placeholder(FormField::Customer), "Podaj nazwę klienta");
        assert_eq!(placeholder(FormField::OrderNumber), "Podaj Numer zamówienia");
        assert_eq!(placeholder(FormField::TotalGross), "Podaj kwotę brutto zamówienia");
    }
}
