//! Derives an invoice's payment status from the payments recorded
//! against it.

use chrono::{NaiveDate, Utc};

use crate::models::{InvoiceStatus, Payment, RentInvoice};
use crate::store::{Store, INVOICES, PAYMENTS};

/// Classify an invoice against every payment referencing it:
/// paid in full, partially paid, overdue (nothing paid, past due), or
/// pending (nothing paid, not yet due). The due date itself still
/// counts as pending.
pub fn classify(invoice: &RentInvoice, payments: &[Payment], today: NaiveDate) -> InvoiceStatus {
    let total_paid: f64 = payments
        .iter()
        .filter(|payment| payment.invoice_id == invoice.id)
        .map(|payment| payment.amount)
        .sum();

    if total_paid >= invoice.total_amount {
        InvoiceStatus::Paid
    } else if total_paid > 0.0 {
        InvoiceStatus::Partial
    } else if today > invoice.due_date {
        InvoiceStatus::Overdue
    } else {
        InvoiceStatus::Pending
    }
}

/// Recompute and persist the stored status of one invoice by rewriting
/// the invoice collection. No-op when the invoice is unknown.
pub fn refresh_invoice_status(store: &Store, invoice_id: &str) {
    let mut invoices: Vec<RentInvoice> = store.load(INVOICES);
    let payments: Vec<Payment> = store.load(PAYMENTS);
    let today = Utc::now().date_naive();

    let Some(invoice) = invoices
        .iter_mut()
        .find(|invoice| invoice.id == invoice_id)
    else {
        return;
    };
    let status = classify(invoice, &payments, today);
    invoice.status = status;
    store.save(INVOICES, &invoices);
}
