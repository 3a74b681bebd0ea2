//! Seed orchestrator: reset the schema and load the sample catalog
//!
//! Strictly sequential, not idempotent, not resumable. Every step logs its
//! start and finish; a failing step is logged with its name and the error is
//! returned unchanged. Closing the pool is the caller's job.

use std::future::Future;

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{error, info};

use crate::db::{ProductRepo, ReviewRepo, UserRepo};
use crate::error::{DbError, Result};
use crate::models::{parse_birthday, NewProduct, NewReview, NewUser, Product, Review, User};
use crate::schema;

/// Image used for every sample product
pub const SAMPLE_IMAGE: &str = "https://images.pexels.com/photos/13221455/pexels-photo-13221455.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// Review id removed by the delete demonstration
pub const DEMO_REVIEW_ID: i32 = 3;

/// `(username, password, birthday)` for the sample users; all are admins.
const SAMPLE_USERS: [(&str, &str, &str); 5] = [
    ("sean", "seanpassword", "09-21-1993"),
    ("gary", "garypassword", "06-11-2022"),
    ("grant", "grantpassword", "07-11-2022"),
    ("wes", "wespassword", "07-11-2022"),
    ("brayden", "braydenpassword", "07-11-2022"),
];

/// Row counts left behind by a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub products: usize,
    pub users: usize,
    pub reviews: usize,
}

/// Drop and rebuild every table, then insert the sample data.
pub async fn run(pool: &PgPool) -> Result<SeedReport> {
    info!("Building the database");

    match build(pool).await {
        Ok(report) => {
            info!(
                products = report.products,
                users = report.users,
                reviews = report.reviews,
                "Finished building the database"
            );
            Ok(report)
        }
        Err(err) => {
            error!(error = %err, "Error building the database");
            Err(err)
        }
    }
}

async fn build(pool: &PgPool) -> Result<SeedReport> {
    step("drop tables", schema::drop_tables(pool)).await?;
    step("create tables", schema::create_tables(pool)).await?;
    step("create initial products", create_initial_products(pool)).await?;
    step("test delete product", test_delete_product(pool)).await?;
    step("create initial users", create_initial_users(pool)).await?;
    step("create initial reviews", create_initial_reviews(pool)).await?;
    step("test delete review", test_delete_review(pool)).await?;

    Ok(SeedReport {
        products: ProductRepo::new(pool).get_all().await?.len(),
        users: UserRepo::new(pool).get_all().await?.len(),
        reviews: ReviewRepo::new(pool).get_all().await?.len(),
    })
}

/// Run one seed step, logging its outcome under `name`.
async fn step<T>(name: &'static str, fut: impl Future<Output = Result<T>>) -> Result<T> {
    info!(step = name, "Starting");
    let result = fut.await;
    match &result {
        Ok(_) => info!(step = name, "Finished"),
        Err(err) => error!(step = name, error = %err, "Seed step failed"),
    }
    result
}

fn sample_product(ordinal: &str, n: i64, test: bool) -> NewProduct {
    let noun = if test { "test product" } else { "product" };
    NewProduct {
        title: format!("The {ordinal} most amazing {noun}"),
        description: format!("Description for the {ordinal} most amazing product ever...."),
        category: format!("Category {n}"),
        image: SAMPLE_IMAGE.to_owned(),
        kind: format!("Product Type {n}"),
        price: Decimal::from(n * 100),
    }
}

/// The three catalog rows a seeded database keeps.
pub fn initial_products() -> Vec<NewProduct> {
    vec![
        sample_product("first", 1, false),
        sample_product("second", 2, false),
        sample_product("third", 3, false),
    ]
}

/// Throwaway rows inserted and removed by the delete demonstration.
pub fn test_products() -> Vec<NewProduct> {
    vec![
        sample_product("first", 1, true),
        sample_product("second", 2, true),
    ]
}

/// The five sample users, birthdays parsed from `MM-DD-YYYY`.
pub fn initial_users() -> Result<Vec<NewUser>> {
    SAMPLE_USERS
        .iter()
        .map(|(username, password, birthday)| -> Result<NewUser> {
            Ok(NewUser {
                username: (*username).to_owned(),
                password: (*password).to_owned(),
                birthday: parse_birthday(birthday)?,
                cart: None,
                active: None,
                admin: Some(true),
            })
        })
        .collect()
}

async fn create_initial_products(pool: &PgPool) -> Result<Vec<Product>> {
    let repo = ProductRepo::new(pool);
    let mut created = Vec::new();
    for product in initial_products() {
        created.push(repo.create(&product).await?);
    }

    info!(products = ?created, "Products created");
    Ok(created)
}

async fn test_delete_product(pool: &PgPool) -> Result<()> {
    let repo = ProductRepo::new(pool);

    let mut test_ids = Vec::new();
    for product in test_products() {
        test_ids.push(repo.create(&product).await?.id);
    }

    let before = repo.get_all().await?;
    info!(products = ?before, "Products before deletion");
    for id in test_ids {
        repo.destroy(id).await?;
    }
    let after = repo.get_all().await?;
    info!(products = ?after, "Products after deletion");

    Ok(())
}

async fn create_initial_users(pool: &PgPool) -> Result<Vec<User>> {
    let repo = UserRepo::new(pool);
    let mut created = Vec::new();
    for user in initial_users()? {
        created.push(repo.create(&user).await?);
    }

    info!(users = ?created, "Users created");
    Ok(created)
}

async fn create_initial_reviews(pool: &PgPool) -> Result<Vec<Review>> {
    let products = ProductRepo::new(pool).get_all().await?;
    let [first, second, third, ..] = products.as_slice() else {
        return Err(DbError::not_found("Product", "three seed products"));
    };

    let reviews = [
        (1, first.id, 1),
        (2, second.id, 2),
        (3, third.id, 5),
    ]
    .map(|(n, product_id, rating)| NewReview {
        name: format!("Review {n}"),
        description: format!("Review Description {n}"),
        rating,
        product_id,
        user_id: n,
    });

    let repo = ReviewRepo::new(pool);
    let mut created = Vec::new();
    for review in &reviews {
        created.push(repo.create(review).await?);
    }

    info!(reviews = ?created, "Reviews created");
    Ok(created)
}

async fn test_delete_review(pool: &PgPool) -> Result<()> {
    let repo = ReviewRepo::new(pool);

    let before = repo.get_all().await?;
    info!(reviews = ?before, "Reviews before deletion");
    repo.destroy(DEMO_REVIEW_ID).await?;
    let after = repo.get_all().await?;
    info!(reviews = ?after, "Reviews after deletion");

    Ok(())
}
