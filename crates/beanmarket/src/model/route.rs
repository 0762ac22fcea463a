use super::GeoPoint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced shipping leg between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCreate {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub price: Decimal,
}
