//! Contact submission entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use leumas_core::domain::{ContactSubmission, NewContactSubmission};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub inquiry: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub submitted_at: DateTimeWithTimeZone,
    pub is_read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactSubmission {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            inquiry: model.inquiry,
            message: model.message,
            submitted_at: model.submitted_at.into(),
            is_read: model.is_read,
        }
    }
}

impl From<NewContactSubmission> for ActiveModel {
    fn from(new: NewContactSubmission) -> Self {
        Self {
            name: Set(new.name),
            email: Set(new.email),
            inquiry: Set(new.inquiry),
            message: Set(new.message),
            submitted_at: Set(new.submitted_at.into()),
            is_read: Set(false),
            ..Default::default()
        }
    }
}
