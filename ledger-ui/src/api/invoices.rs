//! Invoice mutation and list endpoints
//!
//! The mutation pipeline: raw form fields are validated and the amount is
//! normalized to minor units, the single statement is issued against the
//! resolved store, and only after a successful statement are the two
//! effects performed - the cached list view is invalidated, then the
//! caller is redirected to it. A validation failure returns field-level
//! errors without touching the store; a store failure returns a fixed
//! generic message and neither effect runs.

use std::collections::HashMap;

use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use ledger_common::db::models::InvoiceInput;
use ledger_common::money::to_minor_units;
use ledger_common::Error;
use serde::Serialize;
use tracing::error;

use crate::forms::{parse_invoice_form, InvoiceFields};
use crate::{db, AppState, INVOICES_PATH};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /dashboard/invoices
///
/// Serves the cached list view when fresh, otherwise recomputes it from
/// the store and caches the rendered payload.
pub async fn list_invoices(State(state): State<AppState>) -> Response {
    if let Some(cached) = state.cache.get(INVOICES_PATH).await {
        return json_payload(cached);
    }

    let invoices = match db::invoices::list_invoices(&state.db).await {
        Ok(invoices) => invoices,
        Err(e) => return mutation_failure(e),
    };

    match serde_json::to_string(&invoices) {
        Ok(payload) => {
            state.cache.put(INVOICES_PATH, payload.clone()).await;
            json_payload(payload)
        }
        Err(e) => {
            error!("Error rendering invoice list: {}", e);
            mutation_failure(Error::Database("Failed to load invoices.".to_string()))
        }
    }
}

/// POST /dashboard/invoices
///
/// Create flow reports validation failures inline, per field.
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let parsed = match parse_invoice_form(&fields) {
        Ok(parsed) => parsed,
        Err(validation) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(validation)).into_response()
        }
    };

    match db::invoices::create_invoice(&state.db, &normalize(parsed)).await {
        Ok(()) => mutation_success(&state).await,
        Err(e) => mutation_failure(e),
    }
}

/// POST /dashboard/invoices/:id
///
/// Update flow reports validation failures as a plain fixed message.
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let parsed = match parse_invoice_form(&fields) {
        Ok(parsed) => parsed,
        Err(_) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: "Missing or invalid fields. Failed to update invoice.".to_string(),
                }),
            )
                .into_response()
        }
    };

    match db::invoices::update_invoice(&state.db, &id, &normalize(parsed)).await {
        Ok(()) => mutation_success(&state).await,
        Err(e) => mutation_failure(e),
    }
}

/// POST /dashboard/invoices/:id/delete
pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match db::invoices::delete_invoice(&state.db, &id).await {
        Ok(()) => mutation_success(&state).await,
        Err(e) => mutation_failure(e),
    }
}

/// Convert validated form fields into the normalized mutation payload
fn normalize(parsed: InvoiceFields) -> InvoiceInput {
    InvoiceInput {
        customer_id: parsed.customer_id,
        amount_cents: to_minor_units(parsed.amount),
        status: parsed.status,
    }
}

/// Post-mutation effects, in order: invalidate the cached list view,
/// then transfer control to it. Runs only after a successful statement.
async fn mutation_success(state: &AppState) -> Response {
    state.cache.revalidate_path(INVOICES_PATH).await;
    Redirect::to(INVOICES_PATH).into_response()
}

fn mutation_failure(e: Error) -> Response {
    match e {
        Error::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Invoice not found.".to_string(),
            }),
        )
            .into_response(),
        Error::Database(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: message }),
        )
            .into_response(),
        other => {
            error!("Unexpected mutation error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal error.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn json_payload(payload: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], payload).into_response()
}
