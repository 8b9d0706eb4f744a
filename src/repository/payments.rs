use chrono::Utc;
use tracing::warn;

use crate::models::{Payment, RentInvoice};
use crate::schemas::NewPayment;
use crate::services::invoice_status;
use crate::store::{Store, INVOICES, PAYMENTS};

pub fn get_payments(store: &Store) -> Vec<Payment> {
    store.load(PAYMENTS)
}

/// Append-only: payments are never edited or deleted. Tenant and
/// property references are denormalized from the invoice at creation
/// time, and the invoice's stored status is refreshed afterwards.
pub fn add_payment(store: &Store, input: NewPayment) -> Payment {
    let invoices: Vec<RentInvoice> = store.load(INVOICES);
    let invoice = invoices
        .iter()
        .find(|invoice| invoice.id == input.invoice_id);
    if invoice.is_none() {
        warn!(invoice_id = %input.invoice_id, "Recording payment against an unknown invoice");
    }
    let (tenant_id, property_id) = invoice
        .map(|invoice| (invoice.tenant_id.clone(), invoice.property_id.clone()))
        .unwrap_or_default();

    let mut payments = get_payments(store);
    let payment = Payment {
        id: super::new_id(),
        invoice_id: input.invoice_id,
        tenant_id,
        property_id,
        amount: input.amount,
        payment_date: input.payment_date,
        payment_mode: input.payment_mode,
        receipt_number: input.receipt_number,
        notes: input.notes,
        created_at: Utc::now(),
    };
    payments.push(payment.clone());
    store.save(PAYMENTS, &payments);

    invoice_status::refresh_invoice_status(store, &payment.invoice_id);

    payment
}
