//! Stored entity records. Serialization matches the persisted layout:
//! camelCase field names, `YYYY-MM-DD` business dates, RFC 3339 record
//! timestamps, UUID string identifiers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Occupied,
    Vacant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingType {
    Prepaid,
    Postpaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentTerms {
    Monthly,
    Quarterly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementStatus {
    Active,
    Expired,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Partial,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Cash,
    Bank,
    MobileMoney,
    Cheque,
}

impl PaymentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Bank => "bank",
            Self::MobileMoney => "mobile_money",
            Self::Cheque => "cheque",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Repairs,
    Cleaning,
    Utilities,
    Admin,
    Maintenance,
    Other,
}

impl ExpenseCategory {
    /// The six fixed categories, in report order.
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Repairs,
        Self::Cleaning,
        Self::Utilities,
        Self::Admin,
        Self::Maintenance,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Repairs => "repairs",
            Self::Cleaning => "cleaning",
            Self::Utilities => "utilities",
            Self::Admin => "admin",
            Self::Maintenance => "maintenance",
            Self::Other => "other",
        }
    }

    /// Capitalized display label used by the category report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Repairs => "Repairs",
            Self::Cleaning => "Cleaning",
            Self::Utilities => "Utilities",
            Self::Admin => "Admin",
            Self::Maintenance => "Maintenance",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Repairs,
    Painting,
    Cleaning,
    Inspection,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Pending,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilities {
    pub electricity_meter: String,
    pub water_account: String,
    pub billing_type: BillingType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub house_number: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: i64,
    pub rent_rate: f64,
    pub status: PropertyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilities: Option<Utilities>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Display name used by reports and activity feeds.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.house_number, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextOfKin {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub id_passport: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub next_of_kin: NextOfKin,
    pub emergency_contact: EmergencyContact,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenancyAgreement {
    pub id: String,
    pub tenant_id: String,
    pub property_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub security_deposit: f64,
    pub rent_amount: f64,
    pub rent_terms: RentTerms,
    pub status: AgreementStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_in_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_out_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentInvoice {
    pub id: String,
    pub tenant_id: String,
    pub property_id: String,
    /// Empty string when no active agreement matched at creation time.
    pub agreement_id: String,
    pub due_date: NaiveDate,
    pub rent_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilities_amount: Option<f64>,
    /// Fixed at creation: rent plus utilities. Payments never change it.
    pub total_amount: f64,
    pub status: InvoiceStatus,
    /// `YYYY-MM` billing month.
    pub month: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub invoice_id: String,
    pub tenant_id: String,
    pub property_id: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_mode: PaymentMode,
    pub receipt_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    /// Absent for general, non-property expenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub property_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub cost: f64,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<String>,
    pub status: MaintenanceStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::{ExpenseCategory, PaymentMode};

    #[test]
    fn payment_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMode::MobileMoney).expect("serialize"),
            "\"mobile_money\""
        );
        assert_eq!(PaymentMode::MobileMoney.as_str(), "mobile_money");
    }

    #[test]
    fn category_labels_capitalize() {
        for category in ExpenseCategory::ALL {
            let label = category.label();
            assert_eq!(label.to_ascii_lowercase(), category.as_str());
            assert!(label.chars().next().is_some_and(char::is_uppercase));
        }
    }
}
