use beanmarket::identity::{Identity, IdentityKind, ProfilePatch};
use beanmarket::lifecycle::MarketSystem;
use beanmarket::model::{
    CoffeeCreate, CoffeePatch, CustomerCreate, CustomerPatch, GeoPoint, PictureCreate,
    ProducerCreate, RouteCreate, ShipperCreate, TransactionCreate,
};
use beanmarket::stores::RecordError;
use beanmarket::MarketError;
use entity_store::{Criteria, StoreAccess, StoreError};
use rust_decimal::Decimal;
use std::str::FromStr;

fn price(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal")
}

async fn system_with_alice() -> MarketSystem {
    let system = MarketSystem::new(16);
    system
        .customers
        .create_customer(CustomerCreate {
            id: Some("c1".into()),
            email: "alice@example.com".into(),
        })
        .await
        .expect("Failed to create customer");
    system
        .customers
        .update_customer(
            "c1",
            CustomerPatch {
                customer_name: Some("Alice".into()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to name customer");
    system
}

#[tokio::test]
async fn test_apply_update_changes_only_given_fields() {
    let system = system_with_alice().await;
    let before = system.customers.get_customer("c1").await.unwrap().unwrap();

    let raw = r#"{"customer_name":"Alicia","country":"FR"}"#;
    let patch: ProfilePatch = serde_json::from_str(raw).unwrap();
    let updated = system
        .identity
        .apply_update("c1", patch)
        .await
        .expect("Failed to apply update");

    let after = match updated {
        Some(Identity::Customer(customer)) => customer,
        other => panic!("expected a customer, got {other:?}"),
    };
    assert_eq!(after.customer_name.as_deref(), Some("Alicia"));
    assert_eq!(after.country.as_deref(), Some("FR"));
    assert_eq!(after.email, before.email);
    assert_eq!(after.description, before.description);
    assert_eq!(after.geo_location, before.geo_location);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_empty_patch_leaves_record_unchanged() {
    let system = system_with_alice().await;
    let before = system.customers.get_customer("c1").await.unwrap();

    let after = system
        .customers
        .update_customer("c1", CustomerPatch::default())
        .await
        .unwrap();

    assert_eq!(after, before);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_fields_of_other_kinds_are_ignored() {
    let system = system_with_alice().await;

    let patch = ProfilePatch {
        shipper_name: Some("Not a shipper".into()),
        producer_name: Some("Not a producer".into()),
        ..Default::default()
    };
    let updated = system.identity.apply_update("c1", patch).await.unwrap();
    let before = system.customers.get_customer("c1").await.unwrap();

    assert_eq!(updated, before.map(Identity::Customer));
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_geo_location_can_be_set_and_cleared() {
    let system = system_with_alice().await;

    let raw = r#"{"geo_location":{"type":"Point","coordinates":[2.35,48.85]}}"#;
    let set: ProfilePatch = serde_json::from_str(raw).unwrap();
    let updated = system.identity.apply_update("c1", set).await.unwrap();
    let Some(Identity::Customer(located)) = updated else {
        panic!("expected a customer");
    };
    assert_eq!(located.geo_location, Some(GeoPoint::new(48.85, 2.35)));

    let clear: ProfilePatch = serde_json::from_str(r#"{"geo_location":null}"#).unwrap();
    let updated = system.identity.apply_update("c1", clear).await.unwrap();
    let Some(Identity::Customer(cleared)) = updated else {
        panic!("expected a customer");
    };
    assert_eq!(cleared.geo_location, None);
    assert_eq!(cleared.customer_name.as_deref(), Some("Alice"));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_resolution_prefers_producer() {
    let system = MarketSystem::new(16);
    system
        .producers
        .create_producer(ProducerCreate {
            id: Some("shared".into()),
            email: "farm@example.com".into(),
        })
        .await
        .unwrap();
    system
        .customers
        .create_customer(CustomerCreate {
            id: Some("shared".into()),
            email: "buyer@example.com".into(),
        })
        .await
        .unwrap();

    let resolved = system.identity.resolve("shared").await.unwrap().unwrap();
    assert_eq!(resolved.kind(), IdentityKind::Producer);
    assert_eq!(resolved.id(), "shared");

    // the explicit lookup reaches the shadowed customer
    let customer = system
        .identity
        .resolve_as(IdentityKind::Customer, "shared")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(customer.kind(), IdentityKind::Customer);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_shipper_profile_update() {
    let system = MarketSystem::new(16);
    system
        .shippers
        .create_shipper(ShipperCreate {
            id: Some("s1".into()),
            shipper_name: "Harbor Freight Co".into(),
        })
        .await
        .unwrap();

    let patch = ProfilePatch {
        shipper_name: Some("Harbor Freight Ltd".into()),
        customer_name: Some("ignored".into()),
        description: Some(String::new()),
        ..Default::default()
    };
    let updated = system.identity.apply_update("s1", patch).await.unwrap();

    let shipper = match updated {
        Some(Identity::Shipper(shipper)) => shipper,
        other => panic!("expected a shipper, got {other:?}"),
    };
    assert_eq!(shipper.shipper_name, "Harbor Freight Ltd");
    assert_eq!(shipper.description.as_deref(), Some(""));
    assert_eq!(shipper.country, None);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unknown_identity_is_absent() {
    let system = MarketSystem::new(16);

    assert_eq!(system.identity.resolve("missing-id").await.unwrap(), None);
    let patch = ProfilePatch {
        country: Some("US".into()),
        ..Default::default()
    };
    let updated = system
        .identity
        .apply_update("missing-id", patch)
        .await
        .unwrap();
    assert_eq!(updated, None);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_duplicate_id_is_rejected() {
    let system = system_with_alice().await;

    let result = system
        .customers
        .create_customer(CustomerCreate {
            id: Some("c1".into()),
            email: "someone.else@example.com".into(),
        })
        .await;

    assert!(matches!(
        result,
        Err(MarketError::Persistence(StoreError::Conflict(ref id))) if id == "c1"
    ));
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_coffee_requires_existing_producer() {
    let system = MarketSystem::new(16);

    let result = system
        .coffees
        .create_coffee(CoffeeCreate {
            name: "Orphan Roast".into(),
            description: None,
            producer_id: "nobody".into(),
        })
        .await;

    let source = match result {
        Err(MarketError::Persistence(StoreError::Entity(source))) => source,
        other => panic!("expected an entity error, got {other:?}"),
    };
    let record_error = source
        .downcast_ref::<RecordError>()
        .expect("RecordError source");
    assert!(matches!(
        record_error,
        RecordError::MissingOwner { kind: "Producer", id } if id == "nobody"
    ));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_update_coffee_is_not_implemented() {
    let system = MarketSystem::new(16);
    system
        .producers
        .create_producer(ProducerCreate {
            id: Some("p1".into()),
            email: "farm@example.com".into(),
        })
        .await
        .unwrap();
    let coffee = system
        .coffees
        .create_coffee(CoffeeCreate {
            name: "Gesha".into(),
            description: Some("Washed".into()),
            producer_id: "p1".into(),
        })
        .await
        .unwrap();

    let result = system
        .coffees
        .update_coffee(
            &coffee.id,
            CoffeePatch {
                name: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(MarketError::NotImplemented(_))));

    let stored = system.coffees.get_coffee(&coffee.id).await.unwrap();
    assert_eq!(stored, Some(coffee));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_producer_catalog_lists_own_coffees() {
    let system = MarketSystem::new(16);
    for id in ["p1", "p2"] {
        system
            .producers
            .create_producer(ProducerCreate {
                id: Some(id.into()),
                email: format!("{id}@example.com"),
            })
            .await
            .unwrap();
    }
    for (name, producer) in [("Gesha", "p1"), ("Caturra", "p1"), ("SL28", "p2")] {
        system
            .coffees
            .create_coffee(CoffeeCreate {
                name: name.into(),
                description: None,
                producer_id: producer.into(),
            })
            .await
            .unwrap();
    }

    let catalog = system
        .producers
        .get_producer_catalog("p1")
        .await
        .unwrap()
        .expect("Catalog not found");
    let names: Vec<_> = catalog.coffees.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Gesha", "Caturra"]);

    assert_eq!(system.producers.list_producers().await.unwrap().len(), 2);
    let unknown = system.producers.get_producer_catalog("p9").await.unwrap();
    assert_eq!(unknown, None);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_customer_ledger_and_cascade_delete() {
    let system = system_with_alice().await;
    system
        .customers
        .create_customer(CustomerCreate {
            id: Some("c2".into()),
            email: "bruno@example.com".into(),
        })
        .await
        .unwrap();

    let purchases = [(2, "18.50", "c1"), (1, "42.00", "c1"), (4, "10.00", "c2")];
    for (quantity, amount, customer) in purchases {
        system
            .transactions
            .create_transaction(TransactionCreate {
                quantity,
                price: price(amount),
                customer_id: customer.into(),
            })
            .await
            .unwrap();
    }
    let picture = system
        .pictures
        .create_picture(PictureCreate {
            url: "https://images.example.com/alice.jpg".into(),
            customer_id: "c1".into(),
        })
        .await
        .unwrap();

    let ledger = system
        .customers
        .get_customer_ledger("c1")
        .await
        .unwrap()
        .expect("Ledger not found");
    assert_eq!(ledger.transactions.len(), 2);
    assert_eq!(ledger.total_spent(), Some(price("79.00")));

    assert!(system.customers.delete_customer("c1").await.unwrap());
    assert_eq!(system.customers.get_customer("c1").await.unwrap(), None);
    let picture = system.pictures.get_picture(&picture.id).await.unwrap();
    assert_eq!(picture, None);

    let remaining = system
        .transactions
        .find_all(Criteria::All)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].customer_id, "c2");

    assert!(!system.customers.delete_customer("c1").await.unwrap());
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_trait_delete_also_cascades() {
    let system = system_with_alice().await;
    system
        .transactions
        .create_transaction(TransactionCreate {
            quantity: 1,
            price: price("18.50"),
            customer_id: "c1".into(),
        })
        .await
        .unwrap();
    system
        .pictures
        .create_picture(PictureCreate {
            url: "https://images.example.com/alice.jpg".into(),
            customer_id: "c1".into(),
        })
        .await
        .unwrap();

    let removed = StoreAccess::delete(&system.customers, "c1".to_string())
        .await
        .unwrap();
    assert!(removed);
    assert_eq!(system.customers.get_customer("c1").await.unwrap(), None);

    let owner = Criteria::Owner("c1".into());
    let transactions = system.transactions.find_all(owner.clone()).await.unwrap();
    let pictures = system.pictures.find_all(owner).await.unwrap();
    assert!(transactions.is_empty());
    assert!(pictures.is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_ledger_lists_transactions_in_creation_order() {
    let system = system_with_alice().await;
    for quantity in 1..=12 {
        system
            .transactions
            .create_transaction(TransactionCreate {
                quantity,
                price: price("1.00"),
                customer_id: "c1".into(),
            })
            .await
            .unwrap();
    }

    let ledger = system
        .customers
        .get_customer_ledger("c1")
        .await
        .unwrap()
        .expect("Ledger not found");
    let quantities: Vec<u32> = ledger.transactions.iter().map(|t| t.quantity).collect();
    assert_eq!(quantities, (1..=12).collect::<Vec<u32>>());
    assert_eq!(ledger.total_spent(), Some(price("78.00")));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_routes_round_trip_through_store() {
    let system = MarketSystem::new(16);

    let route = system
        .routes
        .create_route(RouteCreate {
            origin: GeoPoint::new(4.81, -75.69),
            destination: GeoPoint::new(53.55, 9.99),
            price: price("1250.00"),
        })
        .await
        .unwrap();

    assert_eq!(route.id, "route_1");
    let stored = system.routes.get_route("route_1").await.unwrap();
    assert_eq!(stored, Some(route));

    system.shutdown().await.expect("Shutdown failed");
}
