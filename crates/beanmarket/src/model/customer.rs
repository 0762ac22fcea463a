use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// A buyer on the marketplace.
///
/// Customers own their transactions and pictures; deleting a customer through
/// [`CustomerClient::delete_customer`](crate::clients::CustomerClient::delete_customer)
/// removes both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub customer_name: Option<String>,
    pub country: Option<String>,
    pub geo_location: Option<GeoPoint>,
    pub description: Option<String>,
    pub email: String,
}

impl Customer {
    /// A customer that has only registered an email so far.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer_name: None,
            country: None,
            geo_location: None,
            description: None,
            email: email.into(),
        }
    }
}

/// Payload for registering a customer.
///
/// `id` is normally the identity issued at sign-up; without one the store
/// generates `customer_<n>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
}

/// Editable customer fields. `None` leaves a field untouched.
///
/// `geo_location` is doubly optional: `Some(None)` clears the stored point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub geo_location: Option<Option<GeoPoint>>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
            && self.country.is_none()
            && self.description.is_none()
            && self.geo_location.is_none()
    }
}
