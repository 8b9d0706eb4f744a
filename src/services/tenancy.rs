//! Agreement signing and the occupancy flip that goes with it.

use tracing::warn;

use crate::models::{PropertyStatus, TenancyAgreement};
use crate::repository::{agreements, properties};
use crate::schemas::{NewAgreement, PropertyPatch};
use crate::store::Store;

/// Create the agreement, then mark its property occupied. The two
/// writes are sequential and non-atomic; when the property cannot be
/// found the agreement still stands and the miss is logged.
pub fn sign_agreement(store: &Store, input: NewAgreement) -> TenancyAgreement {
    let agreement = agreements::add_agreement(store, input);

    let flipped = properties::update_property(
        store,
        &agreement.property_id,
        PropertyPatch {
            status: Some(PropertyStatus::Occupied),
            ..PropertyPatch::default()
        },
    );
    if flipped.is_none() {
        warn!(
            property_id = %agreement.property_id,
            agreement_id = %agreement.id,
            "Signed agreement references an unknown property; occupancy not updated"
        );
    }

    agreement
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::sign_agreement;
    use crate::models::{AgreementStatus, PropertyStatus, RentTerms};
    use crate::repository::properties::{add_property, get_properties};
    use crate::schemas::{NewAgreement, NewProperty};
    use crate::store::Store;

    fn agreement_on(property_id: &str) -> NewAgreement {
        NewAgreement {
            tenant_id: "tenant-1".to_string(),
            property_id: property_id.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date"),
            security_deposit: 800_000.0,
            rent_amount: 800_000.0,
            rent_terms: RentTerms::Monthly,
            status: AgreementStatus::Active,
            move_in_date: Some(NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date")),
            move_out_date: None,
        }
    }

    #[test]
    fn signing_occupies_the_property() {
        let store = Store::in_memory();
        let property = add_property(
            &store,
            NewProperty {
                house_number: "B002".to_string(),
                location: "Ntinda".to_string(),
                kind: "House".to_string(),
                size: 3,
                rent_rate: 1_200_000.0,
                status: PropertyStatus::Vacant,
                utilities: None,
            },
        );

        let agreement = sign_agreement(&store, agreement_on(&property.id));
        assert_eq!(agreement.status, AgreementStatus::Active);

        let properties = get_properties(&store);
        assert_eq!(properties[0].status, PropertyStatus::Occupied);
    }

    #[test]
    fn unknown_property_still_records_the_agreement() {
        let store = Store::in_memory();
        let agreement = sign_agreement(&store, agreement_on("missing"));
        assert_eq!(agreement.property_id, "missing");
        assert!(get_properties(&store).is_empty());
    }
}
