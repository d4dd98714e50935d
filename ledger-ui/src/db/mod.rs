//! Database access layer for ledger-ui

pub mod invoices;
