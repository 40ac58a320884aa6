//! 奖学金实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scholarships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub deadline: i64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scholarship_applications::Entity")]
    Applications,
}

impl Related<super::scholarship_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_scholarship(self) -> crate::models::scholarships::entities::Scholarship {
        use crate::models::scholarships::entities::{Scholarship, ScholarshipStatus};
        use chrono::{DateTime, Utc};

        Scholarship {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            amount_cents: self.amount_cents,
            deadline: DateTime::<Utc>::from_timestamp(self.deadline, 0).unwrap_or_default(),
            status: self
                .status
                .parse::<ScholarshipStatus>()
                .unwrap_or(ScholarshipStatus::Closed),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
