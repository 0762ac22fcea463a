use serde::{Deserialize, Serialize};

/// A coffee farm or cooperative selling on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    pub id: String,
    pub producer_name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub email: String,
}

impl Producer {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            producer_name: None,
            country: None,
            description: None,
            email: email.into(),
        }
    }
}

/// Payload for registering a producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerCreate {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
}

/// Editable producer fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProducerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A producer together with the coffees it sells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerCatalog {
    pub producer: Producer,
    pub coffees: Vec<super::Coffee>,
}
