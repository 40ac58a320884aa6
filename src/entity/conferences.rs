//! 学术会议实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "conferences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub location: String,
    pub starts_at: i64,
    pub ends_at: i64,
    pub capacity: i32,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::conference_registrations::Entity")]
    Registrations,
}

impl Related<super::conference_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_conference(self) -> crate::models::conferences::entities::Conference {
        use crate::models::conferences::entities::{Conference, ConferenceStatus};
        use chrono::{DateTime, Utc};

        Conference {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            location: self.location,
            starts_at: DateTime::<Utc>::from_timestamp(self.starts_at, 0).unwrap_or_default(),
            ends_at: DateTime::<Utc>::from_timestamp(self.ends_at, 0).unwrap_or_default(),
            capacity: self.capacity,
            status: self
                .status
                .parse::<ConferenceStatus>()
                .unwrap_or(ConferenceStatus::Announced),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
