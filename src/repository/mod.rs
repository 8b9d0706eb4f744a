//! Entity repositories: create/read (and update/delete where the
//! contract allows) over the record store. Every mutation is a full
//! read-modify-write of its collection, acceptable at single-landlord
//! portfolio sizes.

pub mod agreements;
pub mod expenses;
pub mod invoices;
pub mod maintenance;
pub mod payments;
pub mod properties;
pub mod tenants;

use uuid::Uuid;

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}
