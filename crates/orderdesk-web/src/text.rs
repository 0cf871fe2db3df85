//! User-facing Polish text

/// Notification after a successful delete
pub const DELETE_SUCCESS: &str = "Pomyślnie usunięto zamówienie.";
/// Notification after a successful create
pub const ADD_SUCCESS: &str = "Pomyślnie dodano zamówienie.";
/// Notification for any request failure
pub const GENERIC_FAILURE: &str = "Coś poszło nie tak. Spróbuj ponownie później.";

/// Blank required field
pub const REQUIRED: &str = "To pole jest wymagane.";
/// Unparseable due date
pub const BAD_DATE: &str = "Podaj poprawną datę.";
/// Unparseable amount
pub const BAD_AMOUNT: &str = "Podaj poprawną kwotę.";
/// Amount below zero
pub const NEGATIVE_AMOUNT: &str = "Kwota nie może być ujemna.";
/// Amount with more than two fraction digits
pub const AMOUNT_SCALE: &str = "Kwota może mieć najwyżej dwa miejsca po przecinku.";

/// Remove dialog title
pub const REMOVE_TITLE: &str = "Usuń Zamówienie";
/// Remove dialog question
pub const REMOVE_PROMPT: &str = "Czy jesteś pewny, że chcesz usunąć zamówienie?";
/// Dismiss button
pub const CANCEL: &str = "Anuluj";
/// Remove dialog confirm button
pub const REMOVE: &str = "Usuń";
/// Row menu entry opening the remove dialog
pub const REMOVE_ROW: &str = "Usuń zamówienie";

/// Previous page button
pub const PREVIOUS: &str = "Poprzednia";
/// Next page button
pub const NEXT: &str = "Następna";

/// Orders card title
pub const ORDERS_TITLE: &str = "Zamówienia";
/// Caption next to the order count
pub const ORDERS_TOTAL: &str = "Wszystkich zamówień";
/// Column menu button
pub const CONFIGURE_VIEW: &str = "Konfiguruj widok";
/// Add button and form title
pub const ADD_ORDER: &str = "Dodaj Zamówienie";
/// Form submit button
pub const SAVE: &str = "Zapisz";
/// Empty table row
pub const NO_ORDERS: &str = "Brak zamówień.";
/// Loading indicator
pub const LOADING: &str = "Ładowanie...";

/// Header greeting
pub fn greeting(name: &str) -> String {
    format!("Witaj ponownie, {name}")
}

/// Pagination label
pub fn page_label(current: u32, total: u32) -> String {
    format!("Strona {current} z {total}")
}
