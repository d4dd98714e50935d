//! Invoice mutation operations
//!
//! Each operation issues exactly one parameterized statement against the
//! injected connection handle. Store failures are classified here: the
//! driver error is logged and only a fixed generic message is returned,
//! so raw store error text never reaches API callers. A zero-row update
//! or delete is surfaced as `NotFound` rather than treated as success.

use chrono::{NaiveDate, Utc};
use ledger_common::db::models::{Invoice, InvoiceInput, InvoiceStatus};
use ledger_common::db::Db;
use ledger_common::{Error, Result};
use tracing::{error, warn};
use uuid::Uuid;

/// Insert one invoice
///
/// The date is server-assigned as the current UTC calendar day at the
/// moment of the call and is immutable thereafter; the amount has already
/// been normalized to minor units.
pub async fn create_invoice(db: &Db, input: &InvoiceInput) -> Result<()> {
    let date = Utc::now().date_naive();

    sqlx::query(
        r#"
        INSERT INTO invoices (customer_id, amount, status, date)
        VALUES ($1::uuid, $2, $3, $4)
        "#,
    )
    .bind(&input.customer_id)
    .bind(input.amount_cents)
    .bind(input.status.as_str())
    .bind(date)
    .execute(db.pool())
    .await
    .map_err(|e| {
        error!("Error creating invoice: {}", e);
        Error::Database("Failed to create invoice.".to_string())
    })?;

    Ok(())
}

/// Update one invoice by id; the stored date is left untouched
pub async fn update_invoice(db: &Db, id: &str, input: &InvoiceInput) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE invoices
        SET customer_id = $1::uuid, amount = $2, status = $3
        WHERE id = $4::uuid
        "#,
    )
    .bind(&input.customer_id)
    .bind(input.amount_cents)
    .bind(input.status.as_str())
    .bind(id)
    .execute(db.pool())
    .await
    .map_err(|e| {
        error!("Error updating invoice {}: {}", id, e);
        Error::Database("Failed to update invoice.".to_string())
    })?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("invoice {}", id)));
    }

    Ok(())
}

/// Delete one invoice by id
pub async fn delete_invoice(db: &Db, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1::uuid")
        .bind(id)
        .execute(db.pool())
        .await
        .map_err(|e| {
            error!("Error deleting invoice {}: {}", id, e);
            Error::Database("Failed to delete invoice.".to_string())
        })?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("invoice {}", id)));
    }

    Ok(())
}

/// Load the invoice list view, newest first
pub async fn list_invoices(db: &Db) -> Result<Vec<Invoice>> {
    let rows = sqlx::query_as::<_, (Uuid, Uuid, i64, String, NaiveDate)>(
        "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC",
    )
    .fetch_all(db.pool())
    .await
    .map_err(|e| {
        error!("Error listing invoices: {}", e);
        Error::Database("Failed to load invoices.".to_string())
    })?;

    Ok(rows
        .into_iter()
        .map(|(id, customer_id, amount, status, date)| {
            let status = InvoiceStatus::from_str(&status).unwrap_or_else(|| {
                warn!("Invoice {} has unknown status '{}', treating as pending", id, status);
                InvoiceStatus::Pending
            });
            Invoice {
                id,
                customer_id,
                amount,
                status,
                date,
            }
        })
        .collect())
}
