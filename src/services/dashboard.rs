//! Point-in-time KPIs over the full book, plus the recent-activity
//! feed.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Expense, InvoiceStatus, Payment, Property, PropertyStatus, RentInvoice, Tenant};
use crate::repository::{expenses, invoices, payments, properties, tenants};
use crate::store::Store;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: i64,
    pub occupied_properties: i64,
    pub vacant_properties: i64,
    pub occupancy_rate: f64,
    pub total_tenants: i64,
    pub monthly_rent_due: f64,
    pub monthly_rent_collected: f64,
    pub rent_collection_rate: f64,
    pub total_arrears: f64,
    pub monthly_expenses: f64,
    pub net_cash_flow: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Payment,
    Expense,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub description: String,
    pub date: NaiveDate,
    pub amount: f64,
}

/// Dashboard snapshot for the current wall-clock month.
pub fn compute(store: &Store) -> DashboardStats {
    let properties = properties::get_properties(store);
    let tenants = tenants::get_tenants(store);
    let invoices = invoices::get_invoices(store);
    let payments = payments::get_payments(store);
    let expenses = expenses::get_expenses(store);
    let current_month = Utc::now().format("%Y-%m").to_string();
    stats_for_month(
        &properties,
        &tenants,
        &invoices,
        &payments,
        &expenses,
        &current_month,
    )
}

pub fn stats_for_month(
    properties: &[Property],
    tenants: &[Tenant],
    invoices: &[RentInvoice],
    payments: &[Payment],
    expenses: &[Expense],
    current_month: &str,
) -> DashboardStats {
    // ── Occupancy ──
    let total_properties = properties.len() as i64;
    let occupied_properties = properties
        .iter()
        .filter(|property| property.status == PropertyStatus::Occupied)
        .count() as i64;
    let vacant_properties = total_properties - occupied_properties;
    let occupancy_rate = if total_properties > 0 {
        occupied_properties as f64 / total_properties as f64 * 100.0
    } else {
        0.0
    };

    // ── Rent due vs collected for the month ──
    let monthly_rent_due: f64 = invoices
        .iter()
        .filter(|invoice| invoice.month == current_month)
        .map(|invoice| invoice.total_amount)
        .sum();
    let monthly_rent_collected: f64 = payments
        .iter()
        .filter(|payment| month_of(payment.payment_date) == current_month)
        .map(|payment| payment.amount)
        .sum();
    let rent_collection_rate = if monthly_rent_due > 0.0 {
        monthly_rent_collected / monthly_rent_due * 100.0
    } else {
        0.0
    };

    // ── Arrears: overdue or partially paid invoices only. A pending
    // invoice with a future due date carries no arrears yet. ──
    let total_arrears: f64 = invoices
        .iter()
        .filter(|invoice| {
            matches!(
                invoice.status,
                InvoiceStatus::Overdue | InvoiceStatus::Partial
            )
        })
        .map(|invoice| invoice.total_amount - paid_against(payments, &invoice.id))
        .sum();

    // ── Cash flow ──
    let monthly_expenses: f64 = expenses
        .iter()
        .filter(|expense| month_of(expense.date) == current_month)
        .map(|expense| expense.amount)
        .sum();
    let net_cash_flow = monthly_rent_collected - monthly_expenses;

    DashboardStats {
        total_properties,
        occupied_properties,
        vacant_properties,
        occupancy_rate,
        total_tenants: tenants.len() as i64,
        monthly_rent_due,
        monthly_rent_collected,
        rent_collection_rate,
        total_arrears,
        monthly_expenses,
        net_cash_flow,
    }
}

/// Recent-activity feed for the dashboard.
pub fn recent(store: &Store) -> Vec<ActivityEntry> {
    recent_activity(
        &payments::get_payments(store),
        &expenses::get_expenses(store),
    )
}

/// Merge the last five payments and last five expenses (by insertion
/// order), then keep the five most recent by date. The sort is stable,
/// so payments stay ahead of expenses on equal dates.
pub fn recent_activity(payments: &[Payment], expenses: &[Expense]) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = Vec::new();

    for payment in payments.iter().skip(payments.len().saturating_sub(5)) {
        entries.push(ActivityEntry {
            id: payment.id.clone(),
            kind: ActivityKind::Payment,
            description: format!("Payment received - {}", payment.payment_mode.as_str()),
            date: payment.payment_date,
            amount: payment.amount,
        });
    }
    for expense in expenses.iter().skip(expenses.len().saturating_sub(5)) {
        entries.push(ActivityEntry {
            id: expense.id.clone(),
            kind: ActivityKind::Expense,
            description: format!("{} - {}", expense.category.as_str(), expense.description),
            date: expense.date,
            amount: expense.amount,
        });
    }

    entries.sort_by(|left, right| right.date.cmp(&left.date));
    entries.truncate(5);
    entries
}

fn month_of(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn paid_against(payments: &[Payment], invoice_id: &str) -> f64 {
    payments
        .iter()
        .filter(|payment| payment.invoice_id == invoice_id)
        .map(|payment| payment.amount)
        .sum()
}
