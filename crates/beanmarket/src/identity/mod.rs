//! # Identity Resolution
//!
//! An authenticated caller is known only by an id. That id may belong to a producer,
//! a customer or a shipper, and the stores do not share a key space, so the owning
//! kind is found by asking each store in turn.
//!
//! ## Lookup Order
//!
//! Producer, then Customer, then Shipper. The first hit wins, so an id present in
//! several stores always resolves to the earliest kind in that order. Callers that
//! already know the kind use [`IdentityResolver::resolve_as`] and skip the search.
//!
//! ## Profile Updates
//!
//! [`IdentityResolver::apply_update`] resolves the kind the same way and narrows a
//! [`ProfilePatch`] to the fields that kind accepts before delegating to its client.
//! Fields meant for other kinds are dropped without error.

pub mod patch;
pub mod resolver;

pub use patch::ProfilePatch;
pub use resolver::IdentityResolver;

use crate::model::{Customer, Producer, Shipper};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The record kinds an identity can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    Producer,
    Customer,
    Shipper,
}

impl IdentityKind {
    /// Resolution order; earlier kinds win ties.
    pub const PRIORITY: [IdentityKind; 3] = [
        IdentityKind::Producer,
        IdentityKind::Customer,
        IdentityKind::Shipper,
    ];
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentityKind::Producer => "producer",
            IdentityKind::Customer => "customer",
            IdentityKind::Shipper => "shipper",
        };
        f.write_str(name)
    }
}

/// A resolved identity: the record tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    Producer(Producer),
    Customer(Customer),
    Shipper(Shipper),
}

impl Identity {
    pub fn kind(&self) -> IdentityKind {
        match self {
            Identity::Producer(_) => IdentityKind::Producer,
            Identity::Customer(_) => IdentityKind::Customer,
            Identity::Shipper(_) => IdentityKind::Shipper,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Identity::Producer(p) => &p.id,
            Identity::Customer(c) => &c.id,
            Identity::Shipper(s) => &s.id,
        }
    }
}

impl From<Producer> for Identity {
    fn from(producer: Producer) -> Self {
        Identity::Producer(producer)
    }
}

impl From<Customer> for Identity {
    fn from(customer: Customer) -> Self {
        Identity::Customer(customer)
    }
}

impl From<Shipper> for Identity {
    fn from(shipper: Shipper) -> Self {
        Identity::Shipper(shipper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_serializes_with_kind_tag() {
        let identity = Identity::Shipper(Shipper::new("s1", "Harbor Freight Co"));
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(json["kind"], "shipper");
        assert_eq!(json["id"], "s1");
        assert_eq!(json["shipper_name"], "Harbor Freight Co");
    }

    #[test]
    fn priority_starts_with_producer() {
        assert_eq!(IdentityKind::PRIORITY[0], IdentityKind::Producer);
        assert_eq!(IdentityKind::Customer.to_string(), "customer");
    }
}
