use serde::{Deserialize, Serialize};

/// A coffee listed by a producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub producer_id: String,
}

/// Payload for listing a coffee. The producer must already exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "producerId")]
    pub producer_id: String,
}

/// Fields a coffee update would carry.
///
/// Coffee updates are not supported yet; see
/// [`CoffeeClient::update_coffee`](crate::clients::CoffeeClient::update_coffee).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoffeePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
