use serde::{Deserialize, Serialize};

/// A logistics partner moving coffee between producers and customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipper {
    pub id: String,
    pub shipper_name: String,
    pub country: Option<String>,
    pub description: Option<String>,
}

impl Shipper {
    pub fn new(id: impl Into<String>, shipper_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shipper_name: shipper_name.into(),
            country: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipperCreate {
    #[serde(default)]
    pub id: Option<String>,
    pub shipper_name: String,
}

/// Editable shipper fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipperPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
