use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchase made by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub quantity: u32,
    pub price: Decimal,
    pub customer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionCreate {
    pub quantity: u32,
    pub price: Decimal,
    #[serde(alias = "customerId")]
    pub customer_id: String,
}

/// A customer together with every transaction they made.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerLedger {
    pub customer: super::Customer,
    pub transactions: Vec<Transaction>,
}

impl CustomerLedger {
    /// Sum of `quantity * price` over all transactions, or `None` if it overflows.
    pub fn total_spent(&self) -> Option<Decimal> {
        let mut total = Decimal::ZERO;
        for t in &self.transactions {
            let line = t.price.checked_mul(Decimal::from(t.quantity))?;
            total = total.checked_add(line)?;
        }
        Some(total)
    }
}
