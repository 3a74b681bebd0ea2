//! Cart repository against a live database

mod common;

use storefront_db::models::NewCart;
use storefront_db::{CartRepo, ProductRepo, UserRepo};

use common::{product, user, TestDb};

#[tokio::test]
#[ignore = "requires database"]
async fn add_and_remove_line_items() {
    let db = TestDb::with_tables().await;
    let owner = UserRepo::new(&db.pool).create(&user("brayden")).await.unwrap();
    let products = ProductRepo::new(&db.pool);
    let pen = products.create(&product("Pen", "office", 2)).await.unwrap();
    let pad = products.create(&product("Pad", "office", 4)).await.unwrap();

    let repo = CartRepo::new(&db.pool);
    let cart = repo
        .create(&NewCart {
            user_id: owner.id,
            product_ids: vec![],
        })
        .await
        .unwrap();
    assert!(cart.items().is_empty());
    assert_eq!(cart.user_id, Some(owner.id));

    repo.add_to_cart(cart.id, pen.id).await.unwrap();
    repo.add_to_cart(cart.id, pad.id).await.unwrap();
    let cart = repo.add_to_cart(cart.id, pen.id).await.unwrap();
    assert_eq!(cart.items(), &[pen.id, pad.id, pen.id]);

    let titles: Vec<String> = repo
        .products(cart.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["Pen", "Pad", "Pen"]);

    let cart = repo.remove_from_cart(cart.id, pen.id).await.unwrap();
    assert_eq!(cart.items(), &[pad.id]);
    assert_eq!(repo.get_by_id(cart.id).await.unwrap(), cart);

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn cart_requires_existing_user() {
    let db = TestDb::with_tables().await;
    let repo = CartRepo::new(&db.pool);

    let err = repo
        .create(&NewCart {
            user_id: 77,
            product_ids: vec![1],
        })
        .await
        .unwrap_err();
    assert!(err.is_foreign_key_violation());

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_cart_is_not_found() {
    let db = TestDb::with_tables().await;
    let repo = CartRepo::new(&db.pool);

    assert!(repo.get_by_id(1).await.unwrap_err().is_not_found());
    assert!(repo.add_to_cart(1, 1).await.unwrap_err().is_not_found());
    assert!(repo.remove_from_cart(1, 1).await.unwrap_err().is_not_found());
    assert!(repo.products(1).await.unwrap_err().is_not_found());

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn listing_and_destroy() {
    let db = TestDb::with_tables().await;
    let users = UserRepo::new(&db.pool);
    let sean = users.create(&user("sean")).await.unwrap();
    let gary = users.create(&user("gary")).await.unwrap();

    let repo = CartRepo::new(&db.pool);
    let first = repo
        .create(&NewCart {
            user_id: sean.id,
            ..Default::default()
        })
        .await
        .unwrap();
    repo.create(&NewCart {
        user_id: gary.id,
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(repo.get_all().await.unwrap().len(), 2);
    assert_eq!(repo.get_for_user(sean.id).await.unwrap(), vec![first.clone()]);

    assert_eq!(repo.destroy(first.id).await.unwrap(), vec![first.clone()]);
    assert!(repo.destroy(first.id).await.unwrap().is_empty());
    assert_eq!(repo.get_all().await.unwrap().len(), 1);

    db.teardown().await;
}
