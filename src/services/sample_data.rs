//! Bootstrap fixtures: a development convenience, not part of the
//! durable contract.

use crate::models::{BillingType, PropertyStatus, Utilities};
use crate::repository::properties;
use crate::schemas::NewProperty;
use crate::store::Store;

/// Seed two example properties when the property collection is empty.
pub fn initialize_sample_data(store: &Store) {
    if !properties::get_properties(store).is_empty() {
        return;
    }

    let samples = [
        NewProperty {
            house_number: "A001".to_string(),
            location: "Kampala Central".to_string(),
            kind: "Apartment".to_string(),
            size: 2,
            rent_rate: 800_000.0,
            status: PropertyStatus::Occupied,
            utilities: Some(Utilities {
                electricity_meter: "EM001".to_string(),
                water_account: "WA001".to_string(),
                billing_type: BillingType::Postpaid,
            }),
        },
        NewProperty {
            house_number: "B002".to_string(),
            location: "Ntinda".to_string(),
            kind: "House".to_string(),
            size: 3,
            rent_rate: 1_200_000.0,
            status: PropertyStatus::Vacant,
            utilities: Some(Utilities {
                electricity_meter: "EM002".to_string(),
                water_account: "WA002".to_string(),
                billing_type: BillingType::Prepaid,
            }),
        },
    ];

    for sample in samples {
        properties::add_property(store, sample);
    }
}
