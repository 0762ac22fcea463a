use serde::{Deserialize, Serialize};

/// A picture uploaded by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub id: String,
    pub url: String,
    pub customer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PictureCreate {
    pub url: String,
    #[serde(alias = "customerId")]
    pub customer_id: String,
}
