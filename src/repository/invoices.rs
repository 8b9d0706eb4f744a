use chrono::Utc;

use crate::models::{InvoiceStatus, Payment, RentInvoice};
use crate::schemas::NewInvoice;
use crate::services::invoice_status;
use crate::store::{Store, AGREEMENTS, INVOICES, PAYMENTS};

use super::agreements::find_active_agreement;

/// Current invoice collection with each status derived at read time
/// from the invoice's payments and today's date, so a past-due unpaid
/// invoice reads `overdue` without waiting for a write to touch it.
/// The derived statuses are not persisted here.
pub fn get_invoices(store: &Store) -> Vec<RentInvoice> {
    let payments: Vec<Payment> = store.load(PAYMENTS);
    let today = Utc::now().date_naive();
    let mut invoices: Vec<RentInvoice> = store.load(INVOICES);
    for invoice in &mut invoices {
        let status = invoice_status::classify(invoice, &payments, today);
        invoice.status = status;
    }
    invoices
}

/// Append-only. Resolves the active agreement for the tenant/property
/// pair (empty string when none) and fixes `total_amount` at creation.
pub fn add_invoice(store: &Store, input: NewInvoice) -> RentInvoice {
    let agreements = store.load(AGREEMENTS);
    let agreement_id = find_active_agreement(&agreements, &input.tenant_id, &input.property_id)
        .map(|agreement| agreement.id)
        .unwrap_or_default();

    let total_amount = input.rent_amount + input.utilities_amount.unwrap_or(0.0);
    let mut invoices: Vec<RentInvoice> = store.load(INVOICES);
    let invoice = RentInvoice {
        id: super::new_id(),
        tenant_id: input.tenant_id,
        property_id: input.property_id,
        agreement_id,
        due_date: input.due_date,
        rent_amount: input.rent_amount,
        utilities_amount: input.utilities_amount,
        total_amount,
        status: InvoiceStatus::Pending,
        month: input.month,
        created_at: Utc::now(),
    };
    invoices.push(invoice.clone());
    store.save(INVOICES, &invoices);
    invoice
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Utc};

    use super::{add_invoice, get_invoices};
    use crate::models::{AgreementStatus, InvoiceStatus, RentTerms};
    use crate::repository::agreements::add_agreement;
    use crate::schemas::{NewAgreement, NewInvoice};
    use crate::store::Store;

    fn invoice_due(due_date: NaiveDate) -> NewInvoice {
        NewInvoice {
            tenant_id: "tenant-1".to_string(),
            property_id: "prop-1".to_string(),
            due_date,
            rent_amount: 800_000.0,
            utilities_amount: Some(50_000.0),
            month: due_date.format("%Y-%m").to_string(),
        }
    }

    #[test]
    fn fixes_total_amount_and_links_active_agreement() {
        let store = Store::in_memory();
        let agreement = add_agreement(
            &store,
            NewAgreement {
                tenant_id: "tenant-1".to_string(),
                property_id: "prop-1".to_string(),
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
                end_date: NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date"),
                security_deposit: 800_000.0,
                rent_amount: 800_000.0,
                rent_terms: RentTerms::Monthly,
                status: AgreementStatus::Active,
                move_in_date: None,
                move_out_date: None,
            },
        );

        let due = Utc::now().date_naive() + Duration::days(10);
        let invoice = add_invoice(&store, invoice_due(due));
        assert_eq!(invoice.total_amount, 850_000.0);
        assert_eq!(invoice.agreement_id, agreement.id);
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }

    #[test]
    fn unmatched_agreement_leaves_reference_empty() {
        let store = Store::in_memory();
        let due = Utc::now().date_naive() + Duration::days(10);
        let invoice = add_invoice(&store, invoice_due(due));
        assert_eq!(invoice.agreement_id, "");
    }

    #[test]
    fn past_due_unpaid_invoice_reads_overdue() {
        let store = Store::in_memory();
        let due = Utc::now().date_naive() - Duration::days(5);
        add_invoice(&store, invoice_due(due));

        let invoices = get_invoices(&store);
        assert_eq!(invoices[0].status, InvoiceStatus::Overdue);
    }

    #[test]
    fn future_due_unpaid_invoice_reads_pending() {
        let store = Store::in_memory();
        let due = Utc::now().date_naive() + Duration::days(5);
        add_invoice(&store, invoice_due(due));

        let invoices = get_invoices(&store);
        assert_eq!(invoices[0].status, InvoiceStatus::Pending);
    }
}
