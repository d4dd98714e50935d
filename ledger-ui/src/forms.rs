//! Invoice form validation
//!
//! Coerces raw form fields into a typed record or reports every violated
//! field together. Pure function of its input; nothing here touches the
//! store, so a validation failure guarantees zero statements were issued.

use std::collections::{BTreeMap, HashMap};

use ledger_common::db::models::InvoiceStatus;
use serde::Serialize;

/// Field-level validation failure
///
/// `errors` maps each violated field name to its ordered list of
/// human-readable messages; `message` is the fixed top-level summary.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, Vec<String>>,
    pub message: String,
}

impl ValidationErrors {
    fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            errors,
            message: "Missing or invalid fields. Failed to save invoice.".to_string(),
        }
    }
}

/// Typed, validated invoice fields
///
/// `amount` is still the decimal form value here; conversion to minor
/// units happens after validation confirms it is positive.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceFields {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Validate raw form fields for invoice create/update
///
/// All violated fields are reported together in one result, not just
/// the first.
pub fn parse_invoice_form(
    fields: &HashMap<String, String>,
) -> Result<InvoiceFields, ValidationErrors> {
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

    let customer_id = fields
        .get("customerId")
        .map(|s| s.trim())
        .unwrap_or_default();
    if customer_id.is_empty() {
        errors
            .entry("customerId".to_string())
            .or_default()
            .push("Please select a customer.".to_string());
    }

    // Coerce to a number; a failed parse and a non-positive value are the
    // same violation from the caller's point of view
    let amount = fields
        .get("amount")
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|a| a.is_finite() && *a > 0.0);
    if amount.is_none() {
        errors
            .entry("amount".to_string())
            .or_default()
            .push("Please enter an amount greater than $0.".to_string());
    }

    let status = fields
        .get("status")
        .and_then(|s| InvoiceStatus::from_str(s.trim()));
    if status.is_none() {
        errors
            .entry("status".to_string())
            .or_default()
            .push("Please select an invoice status.".to_string());
    }

    if errors.is_empty() {
        if let (Some(amount), Some(status)) = (amount, status) {
            return Ok(InvoiceFields {
                customer_id: customer_id.to_string(),
                amount,
                status,
            });
        }
    }

    Err(ValidationErrors::new(errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_form() {
        let parsed = parse_invoice_form(&fields(&[
            ("customerId", "c1"),
            ("amount", "45.50"),
            ("status", "pending"),
        ]))
        .unwrap();

        assert_eq!(parsed.customer_id, "c1");
        assert_eq!(parsed.amount, 45.50);
        assert_eq!(parsed.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_missing_customer() {
        let err = parse_invoice_form(&fields(&[("amount", "45.50"), ("status", "paid")]))
            .unwrap_err();

        assert_eq!(
            err.errors["customerId"],
            vec!["Please select a customer.".to_string()]
        );
        assert!(!err.errors.contains_key("amount"));
        assert!(!err.errors.contains_key("status"));
    }

    #[test]
    fn test_blank_customer_is_missing() {
        let err = parse_invoice_form(&fields(&[
            ("customerId", "   "),
            ("amount", "45.50"),
            ("status", "paid"),
        ]))
        .unwrap_err();

        assert!(err.errors.contains_key("customerId"));
    }

    #[test]
    fn test_negative_amount() {
        let err = parse_invoice_form(&fields(&[
            ("customerId", "c1"),
            ("amount", "-5"),
            ("status", "paid"),
        ]))
        .unwrap_err();

        assert_eq!(
            err.errors["amount"],
            vec!["Please enter an amount greater than $0.".to_string()]
        );
    }

    #[test]
    fn test_zero_amount() {
        let err = parse_invoice_form(&fields(&[
            ("customerId", "c1"),
            ("amount", "0"),
            ("status", "paid"),
        ]))
        .unwrap_err();

        assert!(err.errors.contains_key("amount"));
    }

    #[test]
    fn test_non_finite_amount() {
        let err = parse_invoice_form(&fields(&[
            ("customerId", "c1"),
            ("amount", "inf"),
            ("status", "paid"),
        ]))
        .unwrap_err();

        assert!(err.errors.contains_key("amount"));
    }

    #[test]
    fn test_unparseable_amount() {
        let err = parse_invoice_form(&fields(&[
            ("customerId", "c1"),
            ("amount", "forty-five"),
            ("status", "paid"),
        ]))
        .unwrap_err();

        assert!(err.errors.contains_key("amount"));
    }

    #[test]
    fn test_invalid_status() {
        let err = parse_invoice_form(&fields(&[
            ("customerId", "c1"),
            ("amount", "45.50"),
            ("status", "overdue"),
        ]))
        .unwrap_err();

        assert_eq!(
            err.errors["status"],
            vec!["Please select an invoice status.".to_string()]
        );
    }

    #[test]
    fn test_all_violations_reported_together() {
        let err = parse_invoice_form(&HashMap::new()).unwrap_err();

        assert_eq!(err.errors.len(), 3);
        assert!(err.errors.contains_key("customerId"));
        assert!(err.errors.contains_key("amount"));
        assert!(err.errors.contains_key("status"));
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_error_serialization_shape() {
        let err = parse_invoice_form(&fields(&[("amount", "45.50"), ("status", "paid")]))
            .unwrap_err();
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(
            json["errors"]["customerId"][0],
            "Please select a customer."
        );
        assert!(json["message"].is_string());
    }
}
