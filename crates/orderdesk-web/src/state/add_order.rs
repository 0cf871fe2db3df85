//! Add-order form: draft values, validation and submission state

use crate::text;
use chrono::NaiveDate;
use orderdesk_core::{FieldError, NewOrder, OrderStatus};
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::warn;
use validator::{Validate, ValidationError, ValidationErrors};

/// An input of the add-order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Customer name
    Customer,
    /// Order number
    OrderNumber,
    /// Status select
    Status,
    /// Gross total
    TotalGross,
    /// Due date
    DueDate,
}

impl FormField {
    /// Inputs in form order
    pub const ALL: [Self; 5] = [
        Self::Customer,
        Self::OrderNumber,
        Self::Status,
        Self::TotalGross,
        Self::DueDate,
    ];

    /// Wire name, as used in `fieldErrors`
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::OrderNumber => "orderNumber",
            Self::Status => "status",
            Self::TotalGross => "totalGross",
            Self::DueDate => "dueDate",
        }
    }

    /// Field name on [`OrderDraft`]
    const fn draft_name(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::OrderNumber => "order_number",
            Self::Status => "status",
            Self::TotalGross => "total_gross",
            Self::DueDate => "due_date",
        }
    }

    /// Input label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "Nazwa klienta",
            Self::OrderNumber => "Numer zamówienia",
            Self::Status => "Status zamówienia",
            Self::TotalGross => "Kwota",
            Self::DueDate => "Data",
        }
    }

    /// Field for a wire name, if known
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }

    fn from_draft_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.draft_name() == name)
    }
}

/// Messages shown next to the inputs
pub type FormErrors = BTreeMap<FormField, String>;

/// Raw form values as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct OrderDraft {
    /// Order number
    #[validate(custom(function = "required"))]
    pub order_number: String,

    /// Customer name
    #[validate(custom(function = "required"))]
    pub customer: String,

    /// Status
    #[validate(custom(function = "known_status"))]
    pub status: OrderStatus,

    /// Due date as `YYYY-MM-DD`
    #[validate(custom(function = "valid_due_date"))]
    pub due_date: String,

    /// Gross total; a comma decimal separator is accepted
    #[validate(custom(function = "valid_amount"))]
    pub total_gross: String,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(invalid("required", text::REQUIRED))
    } else {
        Ok(())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn known_status(status: &OrderStatus) -> Result<(), ValidationError> {
    if status.is_known() {
        Ok(())
    } else {
        Err(invalid("required", text::REQUIRED))
    }
}

fn valid_due_date(value: &str) -> Result<(), ValidationError> {
    parse_due_date(value)
        .map(drop)
        .map_err(|message| invalid("due_date", message))
}

fn valid_amount(value: &str) -> Result<(), ValidationError> {
    parse_amount(value)
        .map(drop)
        .map_err(|message| invalid("total_gross", message))
}

/// Parse a `YYYY-MM-DD` date, returning the message to show on failure
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(text::REQUIRED);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| text::BAD_DATE)
}

/// Parse a non-negative amount with at most two fraction digits
///
/// Returns the message to show on failure.
pub fn parse_amount(raw: &str) -> Result<Decimal, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(text::REQUIRED);
    }

    let amount = Decimal::from_str(&raw.replace(',', ".")).map_err(|_| text::BAD_AMOUNT)?;
    if amount < Decimal::ZERO {
        return Err(text::NEGATIVE_AMOUNT);
    }
    if amount.normalize().scale() > 2 {
        return Err(text::AMOUNT_SCALE);
    }
    Ok(amount)
}

fn collect_errors(errors: &ValidationErrors) -> FormErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(name, failures)| {
            let field = FormField::from_draft_name(&name)?;
            let message = failures
                .first()
                .and_then(|failure| failure.message.as_deref())
                .unwrap_or(text::REQUIRED);
            Some((field, message.to_string()))
        })
        .collect()
}

impl OrderDraft {
    /// Validate and convert into a create payload
    ///
    /// # Errors
    ///
    /// Returns the message for every invalid input.
    pub fn to_new_order(&self) -> Result<NewOrder, FormErrors> {
        self.validate().map_err(|e| collect_errors(&e))?;

        let single = |field: FormField, message: &str| {
            FormErrors::from([(field, message.to_string())])
        };
        let due_date =
            parse_due_date(&self.due_date).map_err(|m| single(FormField::DueDate, m))?;
        let total_gross =
            parse_amount(&self.total_gross).map_err(|m| single(FormField::TotalGross, m))?;

        Ok(NewOrder {
            order_number: self.order_number.trim().to_string(),
            customer: self.customer.trim().to_string(),
            status: self.status,
            due_date,
            total_gross,
        })
    }

    /// Raw value of `field`, for binding to its input
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Customer => self.customer.clone(),
            FormField::OrderNumber => self.order_number.clone(),
            FormField::Status => self.status.as_str().to_string(),
            FormField::TotalGross => self.total_gross.clone(),
            FormField::DueDate => self.due_date.clone(),
        }
    }
}

/// Why a submission did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Another submission is in flight
    Busy,
    /// Client-side validation failed; errors are on the form
    Invalid,
}

/// Add-order modal state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOrderForm {
    open: bool,
    draft: OrderDraft,
    errors: FormErrors,
    submitting: bool,
}

impl AddOrderForm {
    /// Show the form
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the form and reset values and errors; ignored while submitting
    pub fn close(&mut self) {
        if self.submitting {
            return;
        }
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Update one input and clear its error
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Customer => self.draft.customer = value.to_string(),
            FormField::OrderNumber => self.draft.order_number = value.to_string(),
            FormField::Status => self.draft.status = OrderStatus::from_wire(value),
            FormField::TotalGross => self.draft.total_gross = value.to_string(),
            FormField::DueDate => self.draft.due_date = value.to_string(),
        }
        self.errors.remove(&field);
    }

    /// Validate and mark the form as submitting
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked::Busy`] while a submission is in flight and
    /// [`SubmitBlocked::Invalid`] when validation fails.
    pub fn begin_submit(&mut self) -> Result<NewOrder, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::Busy);
        }
        match self.draft.to_new_order() {
            Ok(order) => {
                self.errors.clear();
                self.submitting = true;
                Ok(order)
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitBlocked::Invalid)
            }
        }
    }

    /// The order was created: reset and close
    pub fn finish_created(&mut self) {
        self.reset();
    }

    /// The server rejected the order with per-field messages
    ///
    /// Previous errors are replaced. Returns whether any known field was named.
    pub fn finish_rejected(&mut self, field_errors: &[FieldError]) -> bool {
        self.submitting = false;
        self.errors.clear();
        for error in field_errors {
            match FormField::from_wire(&error.field) {
                Some(field) => {
                    self.errors.insert(field, error.message.clone());
                }
                None => warn!(field = %error.field, "Ignoring error for unknown field"),
            }
        }
        !self.errors.is_empty()
    }

    /// The request failed; values are kept
    pub fn finish_failed(&mut self) {
        self.submitting = false;
    }

    /// Whether the modal is shown
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a submission is in flight
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current values
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Message for `field`, if any
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All messages
    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> AddOrderForm {
        let mut form = AddOrderForm::default();
        form.open();
        form.set(FormField::Customer, "Jan Kowalski");
        form.set(FormField::OrderNumber, "ZAM-001");
        form.set(FormField::Status, "processing");
        form.set(FormField::TotalGross, "1234,5");
        form.set(FormField::DueDate, "2024-03-05");
        form
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("123.45"), Ok(Decimal::new(12345, 2)));
        assert_eq!(parse_amount(" 99,9 "), Ok(Decimal::new(999, 1)));
        assert_eq!(parse_amount("0"), Ok(Decimal::ZERO));
        assert_eq!(parse_amount("10.500"), Ok(Decimal::new(10500, 3)));
        assert_eq!(parse_amount(""), Err(text::REQUIRED));
        assert_eq!(parse_amount("abc"), Err(text::BAD_AMOUNT));
        assert_eq!(parse_amount("-1"), Err(text::NEGATIVE_AMOUNT));
        assert_eq!(parse_amount("1.234"), Err(text::AMOUNT_SCALE));
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date("2024-03-05"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        );
        assert_eq!(parse_due_date("  "), Err(text::REQUIRED));
        assert_eq!(parse_due_date("2024-02-30"), Err(text::BAD_DATE));
        assert_eq!(parse_due_date("05.03.2024"), Err(text::BAD_DATE));
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let mut form = AddOrderForm::default();

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(!form.is_submitting());
        for field in [
            FormField::Customer,
            FormField::OrderNumber,
            FormField::TotalGross,
            FormField::DueDate,
        ] {
            assert_eq!(form.error(field), Some(text::REQUIRED), "{field:?}");
        }
        assert!(form.error(FormField::Status).is_none());
    }

    #[test]
    fn test_valid_draft_becomes_payload() {
        let mut form = filled();
        let order = form.begin_submit().unwrap();

        assert_eq!(order.customer, "Jan Kowalski");
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.total_gross, Decimal::new(12345, 1));
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Busy));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = filled();
        form.set(FormField::TotalGross, "-5");
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(form.error(FormField::TotalGross), Some(text::NEGATIVE_AMOUNT));

        form.set(FormField::TotalGross, "5");
        assert!(form.error(FormField::TotalGross).is_none());
    }

    #[test]
    fn test_rejection_replaces_errors() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let known = form.finish_rejected(&[
            FieldError::new("customer", "required"),
            FieldError::new("somethingElse", "ignored"),
        ]);

        assert!(known);
        assert!(!form.is_submitting());
        assert_eq!(
            form.errors(),
            &FormErrors::from([(FormField::Customer, "required".to_string())])
        );
        assert_eq!(form.draft().customer, "Jan Kowalski");

        form.begin_submit().unwrap();
        assert!(!form.finish_rejected(&[FieldError::new("nope", "x")]));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_close_resets_unless_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.close();
        assert!(form.is_open());

        form.finish_failed();
        assert_eq!(form.draft().order_number, "ZAM-001");
        form.close();
        assert_eq!(form, AddOrderForm::default());
    }

    #[test]
    fn test_finish_created_resets_and_closes() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_created();

        assert!(!form.is_open());
        assert_eq!(form.draft(), &OrderDraft::default());
    }
}
