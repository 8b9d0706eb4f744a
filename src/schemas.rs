//! Creation and patch inputs accepted by the repositories. The engine
//! trusts its callers: field validation happens at the boundary above.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AgreementStatus, EmergencyContact, ExpenseCategory, MaintenanceStatus, MaintenanceType,
    NextOfKin, PaymentMode, PropertyStatus, RentTerms, Utilities,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub house_number: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: i64,
    pub rent_rate: f64,
    pub status: PropertyStatus,
    pub utilities: Option<Utilities>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPatch {
    pub house_number: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub size: Option<i64>,
    pub rent_rate: Option<f64>,
    pub status: Option<PropertyStatus>,
    pub utilities: Option<Utilities>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTenant {
    pub name: String,
    pub id_passport: String,
    pub phone: String,
    pub email: Option<String>,
    pub next_of_kin: NextOfKin,
    pub emergency_contact: EmergencyContact,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantPatch {
    pub name: Option<String>,
    pub id_passport: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub next_of_kin: Option<NextOfKin>,
    pub emergency_contact: Option<EmergencyContact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgreement {
    pub tenant_id: String,
    pub property_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub security_deposit: f64,
    pub rent_amount: f64,
    pub rent_terms: RentTerms,
    pub status: AgreementStatus,
    pub move_in_date: Option<NaiveDate>,
    pub move_out_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub tenant_id: String,
    pub property_id: String,
    pub due_date: NaiveDate,
    pub rent_amount: f64,
    pub utilities_amount: Option<f64>,
    /// `YYYY-MM` billing month.
    pub month: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub invoice_id: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_mode: PaymentMode,
    pub receipt_number: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub property_id: Option<String>,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub service_provider: Option<String>,
    pub receipt_number: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRecord {
    pub property_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub cost: f64,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub service_provider: Option<String>,
    pub status: MaintenanceStatus,
}
