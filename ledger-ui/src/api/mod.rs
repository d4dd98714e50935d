//! HTTP API handlers

mod auth;
mod health;
mod invoices;

pub use auth::auth_middleware;
pub use health::health_routes;
pub use invoices::{create_invoice, delete_invoice, list_invoices, update_invoice};
