use serde::{Deserialize, Serialize};

/// A geographic point.
///
/// Serialized as a GeoJSON `Point`, `{"type":"Point","coordinates":[lng, lat]}`,
/// which is how the marketplace has always exchanged locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonPoint", into = "GeoJsonPoint")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: String,
    coordinates: [f64; 2],
}

impl TryFrom<GeoJsonPoint> for GeoPoint {
    type Error = String;

    fn try_from(value: GeoJsonPoint) -> Result<Self, Self::Error> {
        if value.kind != "Point" {
            return Err(format!("expected a Point geometry, got {}", value.kind));
        }
        let [longitude, latitude] = value.coordinates;
        let latitude_ok = (-90.0..=90.0).contains(&latitude);
        let longitude_ok = (-180.0..=180.0).contains(&longitude);
        if !(latitude_ok && longitude_ok) {
            return Err(format!(
                "coordinates out of range: [{longitude}, {latitude}]"
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl From<GeoPoint> for GeoJsonPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [point.longitude, point.latitude],
        }
    }
}
