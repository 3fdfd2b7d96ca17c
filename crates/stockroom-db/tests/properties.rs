//! Behavioral tests for the catalog and the movement ledger, exercising
//! the public surface the way the front ends do: one `Database`, real
//! SQLite underneath (in-memory, except where cross-connection concurrency
//! is the point).

use stockroom_core::{MovementKind, NewProduct, ProductFilter, Role};
use stockroom_db::{Database, DbConfig, StoreError};

fn product(name: &str, category: &str, quantity: i64, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit_price: price,
        supplier: None,
    }
}

async fn in_memory() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

// =============================================================================
// Catalog round-trips
// =============================================================================

#[tokio::test]
async fn created_product_lists_back_with_exact_values() {
    let db = in_memory().await;
    db.products()
        .create(&product("Ground Coffee", "Food", 7, 12.34))
        .await
        .unwrap();

    let listing = db.products().list(&ProductFilter::default()).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].quantity, 7);
    assert_eq!(listing[0].unit_price, 12.34);
    assert_eq!(listing[0].name, "Ground Coffee");
}

#[tokio::test]
async fn same_name_same_category_is_rejected_second_time() {
    let db = in_memory().await;
    db.products()
        .create(&product("Rice", "Food", 1, 1.0))
        .await
        .unwrap();

    let err = db.products().create(&product("Rice", "Food", 9, 2.0)).await;
    assert!(matches!(err, Err(StoreError::Duplicate { .. })));

    // Same name in a different category is a different product
    db.products()
        .create(&product("Rice", "Other", 1, 1.0))
        .await
        .unwrap();
    assert_eq!(db.products().count().await.unwrap(), 2);
}

#[tokio::test]
async fn deleting_missing_product_is_a_noop() {
    let db = in_memory().await;
    assert!(!db.products().delete(4711).await.unwrap());
    assert_eq!(db.products().count().await.unwrap(), 0);
}

#[tokio::test]
async fn deleting_a_product_keeps_its_movement_history() {
    let db = in_memory().await;
    let created = db
        .products()
        .create(&product("Rice", "Food", 10, 4.0))
        .await
        .unwrap();
    db.movements()
        .apply(created.id, 3, MovementKind::Exit, Some("admin"), None)
        .await
        .unwrap();

    assert!(db.products().delete(created.id).await.unwrap());

    // Gone from the catalog...
    let listing = db.products().list(&ProductFilter::default()).await.unwrap();
    assert!(listing.is_empty());

    // ...but the ledger row is still there, detached from the product.
    let history = db.movements().list(10).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].product_id, None);
    assert_eq!(history[0].product_name, None);
    assert_eq!(history[0].quantity, 3);
}

// =============================================================================
// Ledger reconciliation
// =============================================================================

#[tokio::test]
async fn exit_within_stock_updates_quantity_and_appends_one_row() {
    let db = in_memory().await;
    let created = db
        .products()
        .create(&product("Rice", "Food", 10, 4.0))
        .await
        .unwrap();

    let new_quantity = db
        .movements()
        .apply(created.id, 4, MovementKind::Exit, Some("ana"), None)
        .await
        .unwrap();
    assert_eq!(new_quantity, 6);

    let stored = db.products().get(created.id).await.unwrap().unwrap();
    assert_eq!(stored.quantity, 6);

    let history = db.movements().list_for_product(created.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, MovementKind::Exit);
    assert_eq!(history[0].quantity, 4);
}

#[tokio::test]
async fn exit_exceeding_stock_fails_with_no_partial_effect() {
    let db = in_memory().await;
    let created = db
        .products()
        .create(&product("Rice", "Food", 5, 4.0))
        .await
        .unwrap();

    let err = db
        .movements()
        .apply(created.id, 8, MovementKind::Exit, None, None)
        .await;

    match err {
        Err(StoreError::InsufficientStock {
            available,
            requested,
            ..
        }) => {
            assert_eq!(available, 5);
            assert_eq!(requested, 8);
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    // Neither the quantity nor the history changed
    let stored = db.products().get(created.id).await.unwrap().unwrap();
    assert_eq!(stored.quantity, 5);
    assert_eq!(db.movements().count().await.unwrap(), 0);
}

#[tokio::test]
async fn entry_then_exit_of_same_amount_restores_quantity() {
    let db = in_memory().await;
    let created = db
        .products()
        .create(&product("Rice", "Food", 10, 4.0))
        .await
        .unwrap();

    let after_entry = db
        .movements()
        .apply(created.id, 5, MovementKind::Entry, None, None)
        .await
        .unwrap();
    assert_eq!(after_entry, 15);

    let after_exit = db
        .movements()
        .apply(created.id, 5, MovementKind::Exit, None, None)
        .await
        .unwrap();
    assert_eq!(after_exit, 10);

    assert_eq!(db.movements().count().await.unwrap(), 2);
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn authenticate_accepts_only_the_exact_stored_pair() {
    let db = in_memory().await;
    db.users()
        .create("ana", "correct horse", Role::Staff)
        .await
        .unwrap();

    let user = db.users().authenticate("ana", "correct horse").await.unwrap();
    assert_eq!(user.name, "ana");
    assert_eq!(user.role, Role::Staff);

    let wrong_password = db.users().authenticate("ana", "wrong").await;
    assert!(matches!(wrong_password, Err(StoreError::AuthenticationFailed)));

    let unknown_name = db.users().authenticate("nobody", "correct horse").await;
    assert!(matches!(unknown_name, Err(StoreError::AuthenticationFailed)));
}

// =============================================================================
// Concurrent exits
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_exits_never_oversell() {
    // A file-backed store so the two tasks really run on separate pooled
    // connections, like the desktop client and the dashboard would.
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(DbConfig::new(dir.path().join("stockroom.db")))
        .await
        .unwrap();

    let created = db
        .products()
        .create(&product("Rice", "Food", 5, 4.0))
        .await
        .unwrap();

    let db_a = db.clone();
    let db_b = db.clone();
    let id = created.id;

    let task_a = tokio::spawn(async move {
        db_a.movements()
            .apply(id, 3, MovementKind::Exit, Some("a"), None)
            .await
    });
    let task_b = tokio::spawn(async move {
        db_b.movements()
            .apply(id, 3, MovementKind::Exit, Some("b"), None)
            .await
    });

    let result_a = task_a.await.unwrap();
    let result_b = task_b.await.unwrap();

    // Exactly one of the two exits may win
    let successes = [&result_a, &result_b]
        .iter()
        .filter(|r| r.is_ok())
        .count();
    assert_eq!(successes, 1, "got {result_a:?} and {result_b:?}");

    let loser = if result_a.is_err() { result_a } else { result_b };
    assert!(matches!(loser, Err(StoreError::InsufficientStock { .. })));

    // 5 - 3 = 2, never negative; one ledger row per successful call
    let stored = db.products().get(id).await.unwrap().unwrap();
    assert_eq!(stored.quantity, 2);
    assert_eq!(db.movements().count().await.unwrap(), 1);
}
