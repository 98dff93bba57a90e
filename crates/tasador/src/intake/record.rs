use serde::{Deserialize, Serialize};

/// A field the form does not collect but the valuation payload must carry.
///
/// `Unset` serializes to JSON `null`, so the collaborator always receives the
/// key rather than a silently shrunken record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Placeholder<T> {
    Value(T),
    Unset,
}

impl<T> Placeholder<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Placeholder::Unset)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Placeholder::Value(value) => Some(value),
            Placeholder::Unset => None,
        }
    }
}

impl<T> Default for Placeholder<T> {
    fn default() -> Self {
        Placeholder::Unset
    }
}

impl<T> From<T> for Placeholder<T> {
    fn from(value: T) -> Self {
        Placeholder::Value(value)
    }
}

/// The canonical, fixed-shape payload handed to the valuation collaborator.
///
/// Field order mirrors the published wire layout. Counts are unsigned here:
/// a record only exists after validation, so non-negativity is structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    pub name: String,
    pub operation_type: String,
    pub operation_currency: String,
    pub operation_amount: f64,
    pub expenses_currency: String,
    pub expenses_amount: f64,
    pub total_area: f64,
    pub covered_area: f64,
    pub rooms: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub garages: u32,
    pub age: u32,
    pub building_layout: Placeholder<String>,
    pub orientation: Placeholder<String>,
    pub floors: u32,
    pub apartments_per_floor: u32,
    pub real_estate_type: Placeholder<String>,
    pub posting_type: Placeholder<String>,
    pub publisher_id: String,
    pub publisher_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
    pub reserved: Placeholder<bool>,
    pub listing_age: u32,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn unset_placeholder_serializes_to_null() {
        let unset: Placeholder<String> = Placeholder::Unset;
        assert_eq!(serde_json::to_value(unset).expect("serializes"), Value::Null);

        let set = Placeholder::Value("north".to_string());
        assert_eq!(serde_json::to_value(set).expect("serializes"), json!("north"));
    }

    #[test]
    fn null_deserializes_back_to_unset() {
        let unset: Placeholder<String> =
            serde_json::from_value(Value::Null).expect("deserializes");
        assert!(unset.is_unset());

        let set: Placeholder<bool> = serde_json::from_value(json!(true)).expect("deserializes");
        assert_eq!(set.value(), Some(&true));
    }

    #[test]
    fn record_payload_always_carries_placeholder_keys() {
        let record = PropertyRecord {
            id: "prop-1".to_string(),
            name: "Two bedroom".to_string(),
            operation_type: "Venta".to_string(),
            operation_currency: "USD".to_string(),
            operation_amount: 100_000.0,
            expenses_currency: "USD".to_string(),
            expenses_amount: 0.0,
            total_area: 0.0,
            covered_area: 0.0,
            rooms: 0,
            bedrooms: 0,
            bathrooms: 0,
            garages: 0,
            age: 0,
            building_layout: Placeholder::Unset,
            orientation: Placeholder::Unset,
            floors: 0,
            apartments_per_floor: 0,
            real_estate_type: Placeholder::Unset,
            posting_type: Placeholder::Unset,
            publisher_id: String::new(),
            publisher_name: String::new(),
            address: String::new(),
            city: "Palermo".to_string(),
            state: "Capital Federal".to_string(),
            country: "Argentina".to_string(),
            latitude: String::new(),
            longitude: String::new(),
            reserved: Placeholder::Unset,
            listing_age: 0,
            url: String::new(),
        };

        let payload = serde_json::to_value(&record).expect("serializes");
        for key in [
            "building_layout",
            "orientation",
            "real_estate_type",
            "posting_type",
            "reserved",
        ] {
            assert_eq!(payload.get(key), Some(&Value::Null), "{key} must be present");
        }

        let round_trip: PropertyRecord =
            serde_json::from_value(payload).expect("deserializes");
        assert_eq!(round_trip, record);
    }
}
