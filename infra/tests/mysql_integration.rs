//! Integration tests against a live MySQL instance.
//!
//! These require a reachable database; set `DATABASE_URL` (e.g.
//! `mysql://root@localhost:3306/warden_test`) and run with
//! `cargo test -p warden_infra -- --ignored`.

use std::sync::Arc;

use sqlx::MySqlPool;
use uuid::Uuid;

use warden_core::domain::entities::user::User;
use warden_core::errors::{AuthError, DomainError, DomainResult};
use warden_core::repositories::uow::UnitOfWork;
use warden_core::repositories::user::{UserRepository, UserTxSession};
use warden_infra::database::mysql::{MySqlTxSession, MySqlUnitOfWork, MySqlUserRepository};

async fn pool() -> MySqlPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = MySqlPool::connect(&url).await.expect("database unreachable");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id CHAR(36) PRIMARY KEY,
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP(6) NOT NULL,
            updated_at TIMESTAMP(6) NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("schema setup failed");

    pool
}

fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires MySQL"]
async fn committed_users_are_visible_to_the_repository() {
    let pool = pool().await;
    let uow = MySqlUnitOfWork::new(pool.clone());
    let repository = MySqlUserRepository::new(pool);

    let email = unique_email("commit");
    let user = User::new(&email, "hash", "Commit Test");

    uow.run(|session: &mut MySqlTxSession| {
        let user = user.clone();
        Box::pin(async move {
            session.insert(&user).await?;
            Ok(())
        })
    })
    .await
    .unwrap();

    let found = repository.find_by_email(&email).await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
}

#[tokio::test]
#[ignore = "requires MySQL"]
async fn failed_transactions_leave_no_rows() {
    let pool = pool().await;
    let uow = MySqlUnitOfWork::new(pool.clone());
    let repository = MySqlUserRepository::new(pool);

    let email = unique_email("rollback");
    let user = User::new(&email, "hash", "Rollback Test");

    let result: DomainResult<()> = uow
        .run(|session: &mut MySqlTxSession| {
            let user = user.clone();
            Box::pin(async move {
                session.insert(&user).await?;
                Err(DomainError::Validation {
                    message: "abort".to_string(),
                })
            })
        })
        .await;

    assert!(result.is_err());
    assert!(repository.find_by_email(&email).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires MySQL"]
async fn panicking_transactions_roll_back() {
    let pool = pool().await;
    let uow = MySqlUnitOfWork::new(pool.clone());
    let repository = MySqlUserRepository::new(pool);

    let email = unique_email("panic");
    let user = User::new(&email, "hash", "Panic Test");

    let result: DomainResult<()> = uow
        .run(|session: &mut MySqlTxSession| {
            let user = user.clone();
            Box::pin(async move {
                session.insert(&user).await?;
                panic!("mid-transaction panic");
            })
        })
        .await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
    assert!(repository.find_by_email(&email).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires MySQL"]
async fn duplicate_inserts_race_to_exactly_one_success() {
    let pool = pool().await;
    let uow = Arc::new(MySqlUnitOfWork::new(pool.clone()));

    let email = unique_email("race");

    let spawn_insert = |uow: Arc<MySqlUnitOfWork>, email: String| {
        tokio::spawn(async move {
            uow.run(move |session: &mut MySqlTxSession| {
                Box::pin(async move {
                    let user = User::new(&email, "hash", "Race Test");
                    session.insert(&user).await?;
                    Ok(())
                })
            })
            .await
        })
    };

    let first = spawn_insert(Arc::clone(&uow), email.clone());
    let second = spawn_insert(Arc::clone(&uow), email.clone());

    let results = [first.await.unwrap(), second.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(DomainError::Auth(AuthError::AlreadyExists))))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);
}
