//! 奖学金申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scholarship_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub scholarship_id: i64,
    pub user_id: i64,
    #[sea_orm(column_type = "Text")]
    pub motivation: String,
    pub status: String,
    pub reviewer_id: Option<i64>,
    pub decided_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scholarships::Entity",
        from = "Column::ScholarshipId",
        to = "super::scholarships::Column::Id"
    )]
    Scholarship,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::scholarships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scholarship.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_application(
        self,
    ) -> crate::models::scholarships::entities::ScholarshipApplication {
        use crate::models::scholarships::entities::{ApplicationStatus, ScholarshipApplication};
        use chrono::{DateTime, Utc};

        ScholarshipApplication {
            id: self.id,
            scholarship_id: self.scholarship_id,
            user_id: self.user_id,
            motivation: self.motivation,
            status: self
                .status
                .parse::<ApplicationStatus>()
                .unwrap_or(ApplicationStatus::Pending),
            reviewer_id: self.reviewer_id,
            decided_at: self
                .decided_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
