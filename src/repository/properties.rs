use chrono::Utc;

use crate::models::Property;
use crate::schemas::{NewProperty, PropertyPatch};
use crate::store::{Store, PROPERTIES};

pub fn get_properties(store: &Store) -> Vec<Property> {
    store.load(PROPERTIES)
}

pub fn add_property(store: &Store, input: NewProperty) -> Property {
    let mut properties = get_properties(store);
    let now = Utc::now();
    let property = Property {
        id: super::new_id(),
        house_number: input.house_number,
        location: input.location,
        kind: input.kind,
        size: input.size,
        rent_rate: input.rent_rate,
        status: input.status,
        utilities: input.utilities,
        created_at: now,
        updated_at: now,
    };
    properties.push(property.clone());
    store.save(PROPERTIES, &properties);
    property
}

pub fn update_property(store: &Store, id: &str, patch: PropertyPatch) -> Option<Property> {
    let mut properties = get_properties(store);
    let property = properties.iter_mut().find(|property| property.id == id)?;
    if let Some(house_number) = patch.house_number {
        property.house_number = house_number;
    }
    if let Some(location) = patch.location {
        property.location = location;
    }
    if let Some(kind) = patch.kind {
        property.kind = kind;
    }
    if let Some(size) = patch.size {
        property.size = size;
    }
    if let Some(rent_rate) = patch.rent_rate {
        property.rent_rate = rent_rate;
    }
    if let Some(status) = patch.status {
        property.status = status;
    }
    if let Some(utilities) = patch.utilities {
        property.utilities = Some(utilities);
    }
    property.updated_at = Utc::now();
    let updated = property.clone();
    store.save(PROPERTIES, &properties);
    Some(updated)
}

pub fn delete_property(store: &Store, id: &str) -> bool {
    let mut properties = get_properties(store);
    let before = properties.len();
    properties.retain(|property| property.id != id);
    if properties.len() == before {
        return false;
    }
    store.save(PROPERTIES, &properties);
    true
}

#[cfg(test)]
mod tests {
    use super::{add_property, delete_property, get_properties, update_property};
    use crate::models::PropertyStatus;
    use crate::schemas::{NewProperty, PropertyPatch};
    use crate::store::Store;

    fn vacant_house(house_number: &str) -> NewProperty {
        NewProperty {
            house_number: house_number.to_string(),
            location: "Ntinda".to_string(),
            kind: "House".to_string(),
            size: 3,
            rent_rate: 1_200_000.0,
            status: PropertyStatus::Vacant,
            utilities: None,
        }
    }

    #[test]
    fn add_stamps_identity_and_timestamps() {
        let store = Store::in_memory();
        let first = add_property(&store, vacant_house("B001"));
        let second = add_property(&store, vacant_house("B002"));

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(get_properties(&store).len(), 2);
    }

    #[test]
    fn update_merges_patch_fields_only() {
        let store = Store::in_memory();
        let property = add_property(&store, vacant_house("B001"));

        let updated = update_property(
            &store,
            &property.id,
            PropertyPatch {
                status: Some(PropertyStatus::Occupied),
                ..PropertyPatch::default()
            },
        )
        .expect("property exists");

        assert_eq!(updated.status, PropertyStatus::Occupied);
        assert_eq!(updated.house_number, "B001");
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn update_unknown_id_leaves_collection_untouched() {
        let store = Store::in_memory();
        add_property(&store, vacant_house("B001"));

        let result = update_property(&store, "missing", PropertyPatch::default());
        assert!(result.is_none());
        assert_eq!(get_properties(&store)[0].house_number, "B001");
    }

    #[test]
    fn delete_removes_exactly_one() {
        let store = Store::in_memory();
        let keep = add_property(&store, vacant_house("B001"));
        let gone = add_property(&store, vacant_house("B002"));

        assert!(!delete_property(&store, "missing"));
        assert_eq!(get_properties(&store).len(), 2);

        assert!(delete_property(&store, &gone.id));
        let remaining = get_properties(&store);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }
}
