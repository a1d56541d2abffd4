//! PostgreSQL repository implementations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, Set};

use leumas_core::domain::{
    ContactSubmission, NewContactSubmission, NewSubscription, NewsletterSubscription,
};
use leumas_core::error::RepoError;
use leumas_core::ports::{ContactRepository, NewsletterRepository, ViewCounter};
use leumas_core::services::mask_email;

use super::entity::blog_post_stats::{self, Entity as StatsEntity};
use super::entity::contact_submission::{self, Entity as ContactEntity};
use super::entity::newsletter_subscription::{self, Entity as NewsletterEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL newsletter repository.
pub type PostgresNewsletterRepository = PostgresBaseRepository<NewsletterEntity>;

/// PostgreSQL contact submission repository.
pub type PostgresContactRepository = PostgresBaseRepository<ContactEntity>;

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<NewsletterSubscription>, RepoError> {
        tracing::debug!(email = %mask_email(email), "Finding subscription by email");

        let result = NewsletterEntity::find()
            .filter(newsletter_subscription::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, subscription: NewSubscription) -> Result<NewsletterSubscription, RepoError> {
        let active_model: newsletter_subscription::ActiveModel = subscription.into();
        let model = active_model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn set_active(
        &self,
        id: i32,
        active: bool,
        subscribed_at: Option<DateTime<Utc>>,
    ) -> Result<NewsletterSubscription, RepoError> {
        let mut active_model = newsletter_subscription::ActiveModel {
            id: Set(id),
            is_active: Set(active),
            ..Default::default()
        };
        if let Some(at) = subscribed_at {
            active_model.subscribed_at = Set(at.into());
        }

        let model = NewsletterEntity::update(active_model)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => map_db_err(other),
            })?;
        Ok(model.into())
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, submission: NewContactSubmission) -> Result<ContactSubmission, RepoError> {
        let active_model: contact_submission::ActiveModel = submission.into();
        let model = active_model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}

/// View counters in `blog_post_stats`.
pub struct PostgresViewCounter {
    db: Arc<DbConn>,
}

impl PostgresViewCounter {
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl ViewCounter for PostgresViewCounter {
    /// `INSERT .. ON CONFLICT (post_id) DO UPDATE SET views_count = views_count + 1 RETURNING ..`
    async fn increment(&self, post_id: i32) -> Result<i64, RepoError> {
        let row = blog_post_stats::ActiveModel {
            post_id: Set(post_id),
            views_count: Set(1),
        };

        let model = StatsEntity::insert(row)
            .on_conflict(
                OnConflict::column(blog_post_stats::Column::PostId)
                    .value(
                        blog_post_stats::Column::ViewsCount,
                        Expr::col((StatsEntity, blog_post_stats::Column::ViewsCount)).add(1),
                    )
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.views_count)
    }

    async fn get(&self, post_id: i32) -> Result<i64, RepoError> {
        let row = StatsEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map_or(0, |r| r.views_count))
    }

    async fn all(&self) -> Result<HashMap<i32, i64>, RepoError> {
        let rows = StatsEntity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(|r| (r.post_id, r.views_count)).collect())
    }
}
