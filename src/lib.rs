//! Bookkeeping engine for a small landlord's rental portfolio:
//! properties, tenants, tenancy agreements, rent invoices, payments,
//! expenses, and maintenance records over a client-local key-value
//! blob store, with derived invoice status, dashboard KPIs, and yearly
//! report aggregation.
//!
//! Everything is synchronous and single-writer. Callers hold a
//! [`store::Store`] handle and pass it to the repository and service
//! functions; the engine keeps no global state.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod schemas;
pub mod services;
pub mod store;
