//! Derived-state computations and composed operations over the
//! repositories.

pub mod dashboard;
pub mod export;
pub mod invoice_status;
pub mod reports;
pub mod sample_data;
pub mod tenancy;
