//! Order domain types and their wire representation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Default number of orders shown per page
pub const DEFAULT_PER_PAGE: u32 = 7;

/// Largest page size the dashboard will ask for
pub const MAX_PER_PAGE: u32 = 100;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Freshly placed
    #[default]
    New,
    /// Being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Cancelled before delivery
    Cancelled,
    /// Any status value the dashboard does not know about
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Statuses an order can be created with, in form order
    pub const KNOWN: [Self; 5] = [
        Self::New,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire name of the status
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a raw status value, falling back to [`OrderStatus::Unknown`]
    pub fn from_wire(raw: &str) -> Self {
        let raw = raw.trim();
        Self::KNOWN
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or(Self::Unknown)
    }

    /// Whether the status is one of the five known values
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer order as returned by the collection endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier
    #[serde(deserialize_with = "wire_id::deserialize")]
    pub id: String,
    /// Human-facing order number
    pub order_number: String,
    /// Customer name
    pub customer: String,
    /// Current status
    pub status: OrderStatus,
    /// Date the order is due
    #[serde(with = "wire_date")]
    pub due_date: NaiveDate,
    /// Gross total in the base currency
    #[serde(with = "wire_amount")]
    pub total_gross: Decimal,
}

/// Payload for creating an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Human-facing order number
    pub order_number: String,
    /// Customer name
    pub customer: String,
    /// Initial status
    pub status: OrderStatus,
    /// Date the order is due
    #[serde(with = "wire_date")]
    pub due_date: NaiveDate,
    /// Gross total in the base currency
    #[serde(with = "wire_amount")]
    pub total_gross: Decimal,
}

/// One page of the order collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersPage {
    /// Orders on this page, in server order
    pub items: Vec<Order>,
    /// Number of orders in the whole collection
    pub total: u64,
    /// Number of pages at the requested page size
    pub total_pages: u32,
}

impl OrdersPage {
    /// Page count with an empty collection treated as a single page
    pub fn effective_total_pages(&self) -> u32 {
        self.total_pages.max(1)
    }
}

/// Query parameters for listing orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Page number (1-based)
    #[validate(range(min = 1))]
    pub page: u32,

    /// Number of orders per page
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl PageQuery {
    /// Create a query for `page` with `per_page` rows
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// Validation failure for a single named input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the field (`orderNumber`, `customer`, ...)
    pub field: String,
    /// Message to show next to the input
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body of a 422 response from the create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorsBody {
    /// Per-field validation failures
    #[serde(default)]
    pub field_errors: Vec<FieldError>,
}

/// Order ids arrive as strings but some backends send integers
mod wire_id {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IdVisitor)
    }

    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an order id as string or integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }
}

/// Dates go out as `YYYY-MM-DD`; full RFC 3339 timestamps are accepted on the way in
pub mod wire_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Serialize a date as `YYYY-MM-DD`
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    /// Deserialize a date from a plain date or a timestamp
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
    }

    /// Parse the date part of `raw`
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|dt| dt.date())
            })
    }
}

/// Amounts go out as JSON numbers; numbers or numeric strings are accepted on the way in
pub mod wire_amount {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Serializer, ser};
    use std::fmt;
    use std::str::FromStr;

    /// Serialize an amount as a JSON number
    pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = amount
            .to_f64()
            .ok_or_else(|| <S::Error as ser::Error>::custom("amount out of range"))?;
        serializer.serialize_f64(value)
    }

    /// Deserialize an amount from a number or numeric string
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }

    struct AmountVisitor;

    impl Visitor<'_> for AmountVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal amount as number or string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            // Display gives the shortest round-trip form, so 123.45 stays 123.45
            Decimal::from_str(&v.to_string()).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Decimal::from_str(v.trim()).map_err(E::custom)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_order_from_wire() {
        let order: Order = serde_json::from_value(json!({
            "id": "ord_1",
            "orderNumber": "ZAM/2024/001",
            "customer": "Jan Kowalski",
            "status": "shipped",
            "dueDate": "2024-03-05",
            "totalGross": 1234.5
        }))
        .unwrap();

        assert_eq!(order.id, "ord_1");
        assert_eq!(order.order_number, "ZAM/2024/001");
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.due_date, date(2024, 3, 5));
        assert_eq!(order.total_gross, Decimal::new(12345, 1));
    }

    #[test]
    fn test_order_accepts_numeric_id_timestamp_and_string_amount() {
        let order: Order = serde_json::from_value(json!({
            "id": 42,
            "orderNumber": "A-42",
            "customer": "Anna Nowak",
            "status": "delivered",
            "dueDate": "2024-12-31T23:00:00.000Z",
            "totalGross": "99.99"
        }))
        .unwrap();

        assert_eq!(order.id, "42");
        assert_eq!(order.due_date, date(2024, 12, 31));
        assert_eq!(order.total_gross, Decimal::new(9999, 2));
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let order: Order = serde_json::from_value(json!({
            "id": "x",
            "orderNumber": "X",
            "customer": "X",
            "status": "W trakcie",
            "dueDate": "2024-01-01",
            "totalGross": 0
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::Unknown);
        assert!(!order.status.is_known());
    }

    #[test]
    fn test_status_from_wire_is_case_insensitive() {
        assert_eq!(OrderStatus::from_wire(" Delivered "), OrderStatus::Delivered);
        assert_eq!(OrderStatus::from_wire("CANCELLED"), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::from_wire("lost"), OrderStatus::Unknown);
        assert_eq!(OrderStatus::from_wire(""), OrderStatus::Unknown);
    }

    #[test]
    fn test_new_order_wire_shape() {
        let new_order = NewOrder {
            order_number: "ZAM/7".to_string(),
            customer: "Firma Sp. z o.o.".to_string(),
            status: OrderStatus::New,
            due_date: date(2024, 5, 1),
            total_gross: Decimal::new(12345, 2),
        };

        assert_eq!(
            serde_json::to_value(&new_order).unwrap(),
            json!({
                "orderNumber": "ZAM/7",
                "customer": "Firma Sp. z o.o.",
                "status": "new",
                "dueDate": "2024-05-01",
                "totalGross": 123.45
            })
        );
    }

    #[test]
    fn test_orders_page_from_wire() {
        let page: OrdersPage = serde_json::from_value(json!({
            "items": [],
            "total": 0,
            "totalPages": 0
        }))
        .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.effective_total_pages(), 1);
    }

    #[test]
    fn test_page_query_wire_names_and_validation() {
        let query = PageQuery::new(2, 7);
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({"page": 2, "perPage": 7})
        );
        assert!(query.validate().is_ok());
        assert!(PageQuery::new(0, 7).validate().is_err());
        assert!(PageQuery::new(1, 0).validate().is_err());
        assert!(PageQuery::new(1, MAX_PER_PAGE + 1).validate().is_err());
    }

    #[test]
    fn test_field_errors_body() {
        let body: FieldErrorsBody = serde_json::from_value(json!({
            "fieldErrors": [{"field": "customer", "message": "required"}]
        }))
        .unwrap();

        assert_eq!(body.field_errors, vec![FieldError::new("customer", "required")]);

        let empty: FieldErrorsBody = serde_json::from_value(json!({})).unwrap();
        assert!(empty.field_errors.is_empty());
    }

    #[test]
    fn test_wire_date_rejects_garbage() {
        assert!(wire_date::parse("05.03.2024").is_none());
        assert!(wire_date::parse("2024-02-30").is_none());
        assert_eq!(wire_date::parse("2024-02-29"), Some(date(2024, 2, 29)));
    }
}
