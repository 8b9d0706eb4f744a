use chrono::Utc;

use crate::models::{AgreementStatus, TenancyAgreement};
use crate::schemas::NewAgreement;
use crate::store::{Store, AGREEMENTS};

pub fn get_agreements(store: &Store) -> Vec<TenancyAgreement> {
    store.load(AGREEMENTS)
}

/// Append-only: agreements are never edited or deleted in this scope.
/// Creating one does not touch the property's occupancy; the composed
/// `services::tenancy::sign_agreement` operation does both.
pub fn add_agreement(store: &Store, input: NewAgreement) -> TenancyAgreement {
    let mut agreements = get_agreements(store);
    let now = Utc::now();
    let agreement = TenancyAgreement {
        id: super::new_id(),
        tenant_id: input.tenant_id,
        property_id: input.property_id,
        start_date: input.start_date,
        end_date: input.end_date,
        security_deposit: input.security_deposit,
        rent_amount: input.rent_amount,
        rent_terms: input.rent_terms,
        status: input.status,
        move_in_date: input.move_in_date,
        move_out_date: input.move_out_date,
        created_at: now,
        updated_at: now,
    };
    agreements.push(agreement.clone());
    store.save(AGREEMENTS, &agreements);
    agreement
}

/// Linear scan for the active agreement binding a tenant to a property.
/// Multiple agreements per pair may coexist; the first active one wins.
pub fn find_active_agreement(
    agreements: &[TenancyAgreement],
    tenant_id: &str,
    property_id: &str,
) -> Option<TenancyAgreement> {
    agreements
        .iter()
        .find(|agreement| {
            agreement.status == AgreementStatus::Active
                && agreement.tenant_id == tenant_id
                && agreement.property_id == property_id
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{add_agreement, find_active_agreement, get_agreements};
    use crate::models::{AgreementStatus, RentTerms};
    use crate::schemas::NewAgreement;
    use crate::store::Store;

    fn agreement_for(tenant_id: &str, property_id: &str, status: AgreementStatus) -> NewAgreement {
        NewAgreement {
            tenant_id: tenant_id.to_string(),
            property_id: property_id.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date"),
            security_deposit: 800_000.0,
            rent_amount: 800_000.0,
            rent_terms: RentTerms::Monthly,
            status,
            move_in_date: None,
            move_out_date: None,
        }
    }

    #[test]
    fn appends_with_identity() {
        let store = Store::in_memory();
        let agreement = add_agreement(
            &store,
            agreement_for("tenant-1", "prop-1", AgreementStatus::Active),
        );
        assert!(!agreement.id.is_empty());
        assert_eq!(get_agreements(&store).len(), 1);
    }

    #[test]
    fn active_lookup_skips_expired_agreements() {
        let store = Store::in_memory();
        add_agreement(
            &store,
            agreement_for("tenant-1", "prop-1", AgreementStatus::Expired),
        );
        let active = add_agreement(
            &store,
            agreement_for("tenant-1", "prop-1", AgreementStatus::Active),
        );

        let agreements = get_agreements(&store);
        let found =
            find_active_agreement(&agreements, "tenant-1", "prop-1").expect("active agreement");
        assert_eq!(found.id, active.id);
        assert!(find_active_agreement(&agreements, "tenant-1", "prop-2").is_none());
    }
}
