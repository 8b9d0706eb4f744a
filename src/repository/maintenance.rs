use chrono::Utc;

use crate::models::{ExpenseCategory, MaintenanceRecord, MaintenanceStatus};
use crate::schemas::{NewExpense, NewMaintenanceRecord};
use crate::store::{Store, MAINTENANCE};

use super::expenses::add_expense;

pub fn get_maintenance(store: &Store) -> Vec<MaintenanceRecord> {
    store.load(MAINTENANCE)
}

/// Append-only. A record created as `completed` with a positive cost
/// also books the matching maintenance expense; the two writes are
/// sequential and non-atomic. The derivation runs at creation time
/// only, so submitting the same completed work twice books two
/// expenses.
pub fn add_maintenance_record(store: &Store, input: NewMaintenanceRecord) -> MaintenanceRecord {
    let mut records = get_maintenance(store);
    let record = MaintenanceRecord {
        id: super::new_id(),
        property_id: input.property_id,
        date: input.date,
        description: input.description,
        cost: input.cost,
        kind: input.kind,
        service_provider: input.service_provider,
        status: input.status,
        created_at: Utc::now(),
    };
    records.push(record.clone());
    store.save(MAINTENANCE, &records);

    if record.status == MaintenanceStatus::Completed && record.cost > 0.0 {
        add_expense(
            store,
            NewExpense {
                property_id: Some(record.property_id.clone()),
                date: record.date,
                description: format!("Maintenance: {}", record.description),
                amount: record.cost,
                category: ExpenseCategory::Maintenance,
                service_provider: record.service_provider.clone(),
                receipt_number: None,
                notes: None,
            },
        );
    }

    record
}
