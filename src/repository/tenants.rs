use chrono::Utc;

use crate::models::Tenant;
use crate::schemas::{NewTenant, TenantPatch};
use crate::store::{Store, TENANTS};

pub fn get_tenants(store: &Store) -> Vec<Tenant> {
    store.load(TENANTS)
}

pub fn add_tenant(store: &Store, input: NewTenant) -> Tenant {
    let mut tenants = get_tenants(store);
    let now = Utc::now();
    let tenant = Tenant {
        id: super::new_id(),
        name: input.name,
        id_passport: input.id_passport,
        phone: input.phone,
        email: input.email,
        next_of_kin: input.next_of_kin,
        emergency_contact: input.emergency_contact,
        created_at: now,
        updated_at: now,
    };
    tenants.push(tenant.clone());
    store.save(TENANTS, &tenants);
    tenant
}

pub fn update_tenant(store: &Store, id: &str, patch: TenantPatch) -> Option<Tenant> {
    let mut tenants = get_tenants(store);
    let tenant = tenants.iter_mut().find(|tenant| tenant.id == id)?;
    if let Some(name) = patch.name {
        tenant.name = name;
    }
    if let Some(id_passport) = patch.id_passport {
        tenant.id_passport = id_passport;
    }
    if let Some(phone) = patch.phone {
        tenant.phone = phone;
    }
    if let Some(email) = patch.email {
        tenant.email = Some(email);
    }
    if let Some(next_of_kin) = patch.next_of_kin {
        tenant.next_of_kin = next_of_kin;
    }
    if let Some(emergency_contact) = patch.emergency_contact {
        tenant.emergency_contact = emergency_contact;
    }
    tenant.updated_at = Utc::now();
    let updated = tenant.clone();
    store.save(TENANTS, &tenants);
    Some(updated)
}

pub fn delete_tenant(store: &Store, id: &str) -> bool {
    let mut tenants = get_tenants(store);
    let before = tenants.len();
    tenants.retain(|tenant| tenant.id != id);
    if tenants.len() == before {
        return false;
    }
    store.save(TENANTS, &tenants);
    true
}

#[cfg(test)]
mod tests {
    use super::{add_tenant, delete_tenant, get_tenants, update_tenant};
    use crate::schemas::{NewTenant, TenantPatch};
    use crate::store::Store;
    use crate::models::{EmergencyContact, NextOfKin};

    fn tenant_named(name: &str) -> NewTenant {
        NewTenant {
            name: name.to_string(),
            id_passport: "CM1234567".to_string(),
            phone: "+256700000001".to_string(),
            email: None,
            next_of_kin: NextOfKin {
                name: "Jane".to_string(),
                phone: "+256700000002".to_string(),
                relationship: "sister".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "John".to_string(),
                phone: "+256700000003".to_string(),
            },
        }
    }

    #[test]
    fn add_then_update_phone() {
        let store = Store::in_memory();
        let tenant = add_tenant(&store, tenant_named("Alice"));
        assert_eq!(tenant.created_at, tenant.updated_at);

        let updated = update_tenant(
            &store,
            &tenant.id,
            TenantPatch {
                phone: Some("+256700009999".to_string()),
                ..TenantPatch::default()
            },
        )
        .expect("tenant exists");
        assert_eq!(updated.phone, "+256700009999");
        assert_eq!(updated.name, "Alice");
    }

    #[test]
    fn delete_handles_unknown_and_known_ids() {
        let store = Store::in_memory();
        let tenant = add_tenant(&store, tenant_named("Alice"));

        assert!(!delete_tenant(&store, "missing"));
        assert!(delete_tenant(&store, &tenant.id));
        assert!(get_tenants(&store).is_empty());
    }
}
