//! Yearly report aggregation: revenue, expenses, profitability,
//! arrears, and occupancy.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{
    AgreementStatus, Expense, ExpenseCategory, Payment, Property, PropertyStatus, RentInvoice,
    TenancyAgreement, Tenant,
};
use crate::repository::{agreements, expenses, invoices, payments, properties, tenants};
use crate::store::Store;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAmount {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketProfit {
    pub label: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub monthly: Vec<BucketAmount>,
    pub quarterly: Vec<BucketAmount>,
    pub yearly: Vec<BucketAmount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReport {
    pub monthly: Vec<BucketAmount>,
    pub quarterly: Vec<BucketAmount>,
    pub yearly: Vec<BucketAmount>,
    pub by_category: Vec<CategoryAmount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityReport {
    pub monthly: Vec<BucketProfit>,
    pub quarterly: Vec<BucketProfit>,
    pub yearly: Vec<BucketProfit>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantArrears {
    pub tenant_name: String,
    pub amount: f64,
    pub property_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyArrears {
    pub property_name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrearsReport {
    pub total: f64,
    pub by_tenant: Vec<TenantArrears>,
    pub by_property: Vec<PropertyArrears>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySlot {
    pub property_name: String,
    pub status: PropertyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub month: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReport {
    pub current: f64,
    pub by_property: Vec<OccupancySlot>,
    pub trends: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyReport {
    pub revenue: RevenueReport,
    pub expenses: ExpenseReport,
    pub profitability: ProfitabilityReport,
    pub arrears: ArrearsReport,
    pub occupancy: OccupancyReport,
}

/// Full report pack for one calendar year.
pub fn generate(store: &Store, year: i32) -> YearlyReport {
    let properties = properties::get_properties(store);
    let tenants = tenants::get_tenants(store);
    let invoices = invoices::get_invoices(store);
    let payments = payments::get_payments(store);
    let expenses = expenses::get_expenses(store);
    let agreements = agreements::get_agreements(store);

    let revenue = revenue_report(&payments, year);
    let expense = expense_report(&expenses, year);
    let profitability = profitability_report(&revenue, &expense);
    let arrears = arrears_report(&invoices, &payments, &tenants, &properties);
    let occupancy = occupancy_report(&properties, &agreements, &tenants, Utc::now().date_naive());

    YearlyReport {
        revenue,
        expenses: expense,
        profitability,
        arrears,
        occupancy,
    }
}

/// Payment totals bucketed monthly, quarterly, and yearly.
pub fn revenue_report(payments: &[Payment], year: i32) -> RevenueReport {
    let mut monthly = Vec::with_capacity(12);
    for month in 1..=12u32 {
        let amount = payments
            .iter()
            .filter(|payment| in_month(payment.payment_date, year, month))
            .map(|payment| payment.amount)
            .sum();
        monthly.push(BucketAmount {
            label: month_label(year, month),
            amount,
        });
    }

    let mut quarterly = Vec::with_capacity(4);
    for quarter in 1..=4u32 {
        let amount = payments
            .iter()
            .filter(|payment| in_quarter(payment.payment_date, year, quarter))
            .map(|payment| payment.amount)
            .sum();
        quarterly.push(BucketAmount {
            label: format!("Q{quarter} {year}"),
            amount,
        });
    }

    let yearly_amount = payments
        .iter()
        .filter(|payment| payment.payment_date.year() == year)
        .map(|payment| payment.amount)
        .sum();
    let yearly = vec![BucketAmount {
        label: year.to_string(),
        amount: yearly_amount,
    }];

    RevenueReport {
        monthly,
        quarterly,
        yearly,
    }
}

/// Expense totals bucketed like revenue, plus the yearly per-category
/// breakdown (zero-total categories omitted).
pub fn expense_report(expenses: &[Expense], year: i32) -> ExpenseReport {
    let mut monthly = Vec::with_capacity(12);
    for month in 1..=12u32 {
        let amount = expenses
            .iter()
            .filter(|expense| in_month(expense.date, year, month))
            .map(|expense| expense.amount)
            .sum();
        monthly.push(BucketAmount {
            label: month_label(year, month),
            amount,
        });
    }

    let mut quarterly = Vec::with_capacity(4);
    for quarter in 1..=4u32 {
        let amount = expenses
            .iter()
            .filter(|expense| in_quarter(expense.date, year, quarter))
            .map(|expense| expense.amount)
            .sum();
        quarterly.push(BucketAmount {
            label: format!("Q{quarter} {year}"),
            amount,
        });
    }

    let yearly_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| expense.date.year() == year)
        .collect();
    let yearly = vec![BucketAmount {
        label: year.to_string(),
        amount: yearly_expenses.iter().map(|expense| expense.amount).sum(),
    }];

    let mut by_category = Vec::new();
    for category in ExpenseCategory::ALL {
        let amount: f64 = yearly_expenses
            .iter()
            .filter(|expense| expense.category == category)
            .map(|expense| expense.amount)
            .sum();
        if amount > 0.0 {
            by_category.push(CategoryAmount {
                category: category.label().to_string(),
                amount,
            });
        }
    }

    ExpenseReport {
        monthly,
        quarterly,
        yearly,
        by_category,
    }
}

/// Zip the revenue and expense series by bucket index.
pub fn profitability_report(
    revenue: &RevenueReport,
    expenses: &ExpenseReport,
) -> ProfitabilityReport {
    ProfitabilityReport {
        monthly: zip_profit(&revenue.monthly, &expenses.monthly),
        quarterly: zip_profit(&revenue.quarterly, &expenses.quarterly),
        yearly: zip_profit(&revenue.yearly, &expenses.yearly),
    }
}

fn zip_profit(revenue: &[BucketAmount], expenses: &[BucketAmount]) -> Vec<BucketProfit> {
    revenue
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            let spent = expenses.get(index).map(|e| e.amount).unwrap_or(0.0);
            BucketProfit {
                label: bucket.label.clone(),
                revenue: bucket.amount,
                expenses: spent,
                profit: bucket.amount - spent,
            }
        })
        .collect()
}

/// Outstanding balances by tenant and by property.
///
/// The per-tenant row records the property name of the last invoice
/// found with an outstanding balance, not an aggregate across
/// properties.
pub fn arrears_report(
    invoices: &[RentInvoice],
    payments: &[Payment],
    tenants: &[Tenant],
    properties: &[Property],
) -> ArrearsReport {
    let mut by_tenant = Vec::new();
    let mut total = 0.0;

    for tenant in tenants {
        let mut tenant_arrears = 0.0;
        let mut property_name = String::new();

        for invoice in invoices
            .iter()
            .filter(|invoice| invoice.tenant_id == tenant.id)
        {
            let outstanding = invoice.total_amount - paid_against(payments, &invoice.id);
            if outstanding > 0.0 {
                tenant_arrears += outstanding;
                property_name = property_display_name(properties, &invoice.property_id);
            }
        }

        if tenant_arrears > 0.0 {
            by_tenant.push(TenantArrears {
                tenant_name: tenant.name.clone(),
                amount: tenant_arrears,
                property_name,
            });
            total += tenant_arrears;
        }
    }

    // Keyed by display name; BTreeMap keeps the listing deterministic.
    let mut property_totals: BTreeMap<String, f64> = BTreeMap::new();
    for invoice in invoices {
        let outstanding = invoice.total_amount - paid_against(payments, &invoice.id);
        if outstanding > 0.0 {
            let name = property_display_name(properties, &invoice.property_id);
            *property_totals.entry(name).or_insert(0.0) += outstanding;
        }
    }
    let by_property = property_totals
        .into_iter()
        .map(|(property_name, amount)| PropertyArrears {
            property_name,
            amount,
        })
        .collect();

    ArrearsReport {
        total,
        by_tenant,
        by_property,
    }
}

/// Current occupancy, per-property slots, and the trailing-12-month
/// trend. No historical occupancy is tracked, so the trend repeats the
/// current rate under each month label.
pub fn occupancy_report(
    properties: &[Property],
    agreements: &[TenancyAgreement],
    tenants: &[Tenant],
    today: NaiveDate,
) -> OccupancyReport {
    let occupied = properties
        .iter()
        .filter(|property| property.status == PropertyStatus::Occupied)
        .count();
    let current = if properties.is_empty() {
        0.0
    } else {
        occupied as f64 / properties.len() as f64 * 100.0
    };

    let by_property = properties
        .iter()
        .map(|property| {
            let tenant = agreements
                .iter()
                .find(|agreement| {
                    agreement.property_id == property.id
                        && agreement.status == AgreementStatus::Active
                })
                .and_then(|agreement| {
                    tenants
                        .iter()
                        .find(|tenant| tenant.id == agreement.tenant_id)
                })
                .map(|tenant| tenant.name.clone());
            OccupancySlot {
                property_name: property.display_name(),
                status: property.status,
                tenant,
            }
        })
        .collect();

    let mut trends = Vec::with_capacity(12);
    for offset in (0..12).rev() {
        let (year, month) = months_back(today, offset);
        trends.push(TrendPoint {
            month: month_label(year, month),
            rate: current,
        });
    }

    OccupancyReport {
        current,
        by_property,
        trends,
    }
}

fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

fn in_quarter(date: NaiveDate, year: i32, quarter: u32) -> bool {
    let start_month = (quarter - 1) * 3 + 1;
    let end_month = quarter * 3;
    date.year() == year && date.month() >= start_month && date.month() <= end_month
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

fn months_back(today: NaiveDate, offset: i32) -> (i32, u32) {
    let mut year = today.year();
    let mut month = today.month() as i32 - offset;
    while month <= 0 {
        month += 12;
        year -= 1;
    }
    (year, month as u32)
}

fn paid_against(payments: &[Payment], invoice_id: &str) -> f64 {
    payments
        .iter()
        .filter(|payment| payment.invoice_id == invoice_id)
        .map(|payment| payment.amount)
        .sum()
}

fn property_display_name(properties: &[Property], property_id: &str) -> String {
    properties
        .iter()
        .find(|property| property.id == property_id)
        .map(Property::display_name)
        .unwrap_or_else(|| "Unknown".to_string())
}
