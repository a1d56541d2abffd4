//! Newsletter subscription entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use leumas_core::domain::{NewSubscription, NewsletterSubscription};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "newsletter_subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub subscribed_at: DateTimeWithTimeZone,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain subscription.
impl From<Model> for NewsletterSubscription {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            subscribed_at: model.subscribed_at.into(),
            is_active: model.is_active,
        }
    }
}

/// A new, active row; the id is assigned by the database.
impl From<NewSubscription> for ActiveModel {
    fn from(new: NewSubscription) -> Self {
        Self {
            email: Set(new.email),
            subscribed_at: Set(new.subscribed_at.into()),
            is_active: Set(true),
            ..Default::default()
        }
    }
}
