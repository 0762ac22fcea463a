use crate::model::{CustomerPatch, GeoPoint, ProducerPatch, ShipperPatch};
use serde::Deserialize;

/// Profile changes sent by an identity that has not said which kind it is.
///
/// Carries the union of every kind's editable fields. Unknown JSON fields are
/// ignored; `"geo_location": null` clears the location while an absent
/// `geo_location` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfilePatch {
    #[serde(default)]
    pub producer_name: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub shipper_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::model::present")]
    pub geo_location: Option<Option<GeoPoint>>,
}

impl ProfilePatch {
    pub fn for_producer(self) -> ProducerPatch {
        ProducerPatch {
            producer_name: self.producer_name,
            country: self.country,
            description: self.description,
        }
    }

    pub fn for_customer(self) -> CustomerPatch {
        CustomerPatch {
            customer_name: self.customer_name,
            country: self.country,
            description: self.description,
            geo_location: self.geo_location,
        }
    }

    pub fn for_shipper(self) -> ShipperPatch {
        ShipperPatch {
            shipper_name: self.shipper_name,
            country: self.country,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_kinds_fields_are_dropped() {
        let patch: ProfilePatch = serde_json::from_str(
            r#"{"customer_name":"Alicia","shipper_name":"Nope","country":"FR","plan":"gold"}"#,
        )
        .unwrap();

        let customer = patch.for_customer();
        assert_eq!(customer.customer_name.as_deref(), Some("Alicia"));
        assert_eq!(customer.country.as_deref(), Some("FR"));
        assert_eq!(customer.geo_location, None);
    }

    #[test]
    fn null_location_means_clear() {
        let patch: ProfilePatch = serde_json::from_str(r#"{"geo_location":null}"#).unwrap();
        assert_eq!(patch.geo_location, Some(None));

        let patch: ProfilePatch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.geo_location, None);
        assert!(patch.for_customer().is_empty());
    }

    #[test]
    fn location_is_read_as_geojson() {
        let patch: ProfilePatch = serde_json::from_str(
            r#"{"geo_location":{"type":"Point","coordinates":[-75.69,4.81]}}"#,
        )
        .unwrap();

        assert_eq!(patch.geo_location, Some(Some(GeoPoint::new(4.81, -75.69))));
    }

    #[test]
    fn producer_projection_keeps_shared_fields() {
        let patch = ProfilePatch {
            producer_name: Some("Finca La Esperanza".into()),
            customer_name: Some("ignored".into()),
            description: Some(String::new()),
            ..Default::default()
        };

        let producer = patch.for_producer();
        assert_eq!(producer.producer_name.as_deref(), Some("Finca La Esperanza"));
        assert_eq!(producer.description.as_deref(), Some(""));
        assert_eq!(producer.country, None);
    }
}
