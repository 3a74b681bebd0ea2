//! End-to-end seed run against an empty schema

mod common;

use storefront_db::seed::{self, SeedReport};
use storefront_db::{DbError, ProductRepo, ReviewRepo, UserRepo};

use common::TestDb;

#[tokio::test]
#[ignore = "requires database"]
async fn seed_builds_sample_catalog() {
    let db = TestDb::empty().await;

    let report = seed::run(&db.pool).await.unwrap();
    assert_eq!(
        report,
        SeedReport {
            products: 3,
            users: 5,
            reviews: 2,
        }
    );

    let titles: Vec<String> = ProductRepo::new(&db.pool)
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    let expected: Vec<String> = seed::initial_products()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, expected);

    let usernames: Vec<String> = UserRepo::new(&db.pool)
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(usernames, vec!["sean", "gary", "grant", "wes", "brayden"]);

    let reviews = ReviewRepo::new(&db.pool).get_all().await.unwrap();
    let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![1, 2]);
    assert!(reviews.iter().all(|r| r.id != seed::DEMO_REVIEW_ID));

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn seed_resets_existing_data() {
    let db = TestDb::empty().await;

    seed::run(&db.pool).await.unwrap();
    let report = seed::run(&db.pool).await.unwrap();

    assert_eq!(report.products, 3);
    assert_eq!(report.users, 5);
    let first = ProductRepo::new(&db.pool).get_by_id(1).await.unwrap();
    assert_eq!(first.title, "The first most amazing product");

    db.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn failing_step_returns_database_error_unchanged() {
    let db = TestDb::empty().await;
    // DROP TABLE refuses to drop a view, so the drop step fails on "products"
    sqlx::query("CREATE VIEW products AS SELECT 1 AS id")
        .execute(&db.pool)
        .await
        .unwrap();

    let err = seed::run(&db.pool).await.unwrap_err();
    let DbError::Sqlx(sqlx::Error::Database(db_err)) = &err else {
        panic!("expected a database error, got {err:?}");
    };
    assert_eq!(db_err.code().as_deref(), Some("42809")); // wrong_object_type
    assert!(db_err.message().contains("products"));

    // Later steps never ran
    let (users_exists,): (bool,) = sqlx::query_as("SELECT to_regclass('users') IS NOT NULL")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert!(!users_exists);

    // Closing is left to the caller
    assert!(!db.pool.is_closed());
    db.teardown().await;
}
