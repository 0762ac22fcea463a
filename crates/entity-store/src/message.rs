//! # Store Messages
//!
//! The request and criteria types exchanged between a [`StoreClient`](crate::StoreClient)
//! and its [`EntityStore`](crate::EntityStore).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Selection used by `find_all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criteria<Id> {
    /// Every record.
    All,
    /// Equality on the primary key.
    Id(Id),
    /// Equality on the owning reference (see [`StoreEntity::owner_id`]).
    Owner(String),
}

impl<Id: PartialEq> Criteria<Id> {
    /// Whether a record with this id and owner is selected.
    pub fn matches(&self, id: &Id, owner: Option<&str>) -> bool {
        match self {
            Criteria::All => true,
            Criteria::Id(wanted) => wanted == id,
            Criteria::Owner(wanted) => owner == Some(wanted.as_str()),
        }
    }
}

/// Request sent to a store.
///
/// # The CRUD Pattern
/// The variants map onto the operations a relational table offers:
///
/// - **Create**: insert a record built from [`StoreEntity::Create`]; answers with the stored record.
/// - **Find**: lookup by primary key; absent is `None`, not an error.
/// - **FindAll**: every record matching a [`Criteria`].
/// - **Update**: merge a [`StoreEntity::Patch`]; answers with the affected count only.
/// - **Delete**: remove by primary key; answers with the affected count.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Find {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindAll {
        criteria: Criteria<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<u64>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_selects_by_id_and_owner() {
        let id = "t_1".to_string();
        assert!(Criteria::All.matches(&id, None));
        assert!(Criteria::Id("t_1".to_string()).matches(&id, None));
        assert!(!Criteria::Id("t_2".to_string()).matches(&id, Some("c1")));
        let owner = Criteria::<String>::Owner("c1".into());
        assert!(owner.matches(&id, Some("c1")));
        assert!(!owner.matches(&id, None));
    }
}
