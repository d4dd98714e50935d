//! Database models shared across Ledger services

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invoice payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Parse the database/form representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }

    /// Database/form representation
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

/// A stored invoice row
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Amount in whole minor units (cents)
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Validated, normalized input for invoice create/update operations
///
/// Produced by the form validator after amount normalization; the id and
/// date are never part of this payload (server-assigned on create, and
/// the date is immutable thereafter).
#[derive(Debug, Clone)]
pub struct InvoiceInput {
    pub customer_id: String,
    /// Amount in whole minor units (cents)
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// A stored customer row
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion() {
        assert_eq!(InvoiceStatus::from_str("pending"), Some(InvoiceStatus::Pending));
        assert_eq!(InvoiceStatus::from_str("paid"), Some(InvoiceStatus::Paid));
        assert_eq!(InvoiceStatus::from_str("overdue"), None);
        assert_eq!(InvoiceStatus::from_str("Pending"), None);
        assert_eq!(InvoiceStatus::from_str(""), None);

        assert_eq!(InvoiceStatus::Pending.as_str(), "pending");
        assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::from_str::<InvoiceStatus>("\"paid\"").unwrap(),
            InvoiceStatus::Paid
        );
    }
}
