use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

use leumas_core::domain::{NewContactSubmission, NewSubscription, NewsletterSubscription};
use leumas_core::error::RepoError;
use leumas_core::ports::{BaseRepository, ContactRepository, NewsletterRepository, ViewCounter};

use crate::database::entity::{blog_post_stats, contact_submission, newsletter_subscription};
use crate::database::postgres_base::map_db_err;
use crate::database::postgres_repo::{
    PostgresContactRepository, PostgresNewsletterRepository, PostgresViewCounter,
};

fn subscription(id: i32, email: &str, is_active: bool) -> newsletter_subscription::Model {
    newsletter_subscription::Model {
        id,
        email: email.to_owned(),
        subscribed_at: Utc::now().into(),
        is_active,
    }
}

#[tokio::test]
async fn test_find_subscription_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![subscription(7, "x@y.z", true)]])
        .into_connection();

    let repo = PostgresNewsletterRepository::new(db);
    let result: Option<NewsletterSubscription> = repo.find_by_id(7).await.unwrap();

    let found = result.unwrap();
    assert_eq!(found.id, 7);
    assert_eq!(found.email, "x@y.z");
}

#[tokio::test]
async fn test_find_subscription_by_email() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![subscription(1, "x@y.z", false)]])
        .append_query_results(vec![Vec::<newsletter_subscription::Model>::new()])
        .into_connection();

    let repo = PostgresNewsletterRepository::new(db);

    let found = repo.find_by_email("x@y.z").await.unwrap().unwrap();
    assert!(!found.is_active);
    assert!(repo.find_by_email("other@y.z").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_subscription_returns_inserted_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![subscription(3, "new@y.z", true)]])
        .into_connection();

    let repo = PostgresNewsletterRepository::new(db);
    let created = repo.create(NewSubscription::new("new@y.z")).await.unwrap();

    assert_eq!(created.id, 3);
    assert!(created.is_active);
}

#[tokio::test]
async fn test_set_active_returns_updated_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![subscription(4, "x@y.z", false)]])
        .into_connection();

    let repo = PostgresNewsletterRepository::new(db);
    let updated = repo.set_active(4, false, None).await.unwrap();

    assert_eq!(updated.id, 4);
    assert!(!updated.is_active);
}

#[tokio::test]
async fn test_create_contact_submission() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![contact_submission::Model {
            id: 1,
            name: "Alice".to_owned(),
            email: "a@x.io".to_owned(),
            inquiry: "Hi".to_owned(),
            message: "Hello".to_owned(),
            submitted_at: now.into(),
            is_read: false,
        }]])
        .into_connection();

    let repo = PostgresContactRepository::new(db);
    let stored = repo
        .create(NewContactSubmission {
            name: "Alice".into(),
            email: "a@x.io".into(),
            inquiry: "Hi".into(),
            message: "Hello".into(),
            submitted_at: now,
        })
        .await
        .unwrap();

    assert_eq!(stored.id, 1);
    assert_eq!(stored.inquiry, "Hi");
    assert!(!stored.is_read);
}

#[tokio::test]
async fn test_increment_views_returns_new_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![blog_post_stats::Model {
            post_id: 2,
            views_count: 42,
        }]])
        .into_connection();

    let counter = PostgresViewCounter::new(db);
    assert_eq!(counter.increment(2).await.unwrap(), 42);
}

#[tokio::test]
async fn test_views_default_to_zero() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog_post_stats::Model>::new()])
        .append_query_results(vec![vec![
            blog_post_stats::Model { post_id: 1, views_count: 5 },
            blog_post_stats::Model { post_id: 3, views_count: 9 },
        ]])
        .into_connection();

    let counter = PostgresViewCounter::new(db);
    assert_eq!(counter.get(1).await.unwrap(), 0);

    let all = counter.all().await.unwrap();
    assert_eq!(all.get(&1), Some(&5));
    assert_eq!(all.get(&3), Some(&9));
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_repositories_share_one_connection() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![subscription(1, "x@y.z", true)]])
            .append_query_results(vec![vec![blog_post_stats::Model {
                post_id: 5,
                views_count: 3,
            }]])
            .into_connection(),
    );

    let newsletter = PostgresNewsletterRepository::new(Arc::clone(&db));
    let views = PostgresViewCounter::new(Arc::clone(&db));

    assert!(newsletter.find_by_email("x@y.z").await.unwrap().is_some());
    assert_eq!(views.get(5).await.unwrap(), 3);
    assert_eq!(Arc::strong_count(&db), 3);
}

#[test]
fn test_unique_violation_maps_to_constraint() {
    let err = map_db_err(DbErr::Custom(
        "duplicate key value violates unique constraint \"newsletter_subscriptions_email_key\"".into(),
    ));
    assert!(matches!(err, RepoError::Constraint(_)));

    let err = map_db_err(DbErr::Custom("connection reset".into()));
    assert!(matches!(err, RepoError::Query(_)));
}
