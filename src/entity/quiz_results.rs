//! 测验成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub enrollment_id: i64,
    pub module_id: Option<i64>,
    pub score: i32,
    pub max_score: i32,
    pub taken_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enrollments::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollments::Column::Id"
    )]
    Enrollment,
    #[sea_orm(
        belongs_to = "super::course_modules::Entity",
        from = "Column::ModuleId",
        to = "super::course_modules::Column::Id"
    )]
    Module,
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::course_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_quiz_result(self) -> crate::models::enrollments::entities::QuizResult {
        use chrono::{DateTime, Utc};

        crate::models::enrollments::entities::QuizResult {
            id: self.id,
            enrollment_id: self.enrollment_id,
            module_id: self.module_id,
            score: self.score,
            max_score: self.max_score,
            taken_at: DateTime::<Utc>::from_timestamp(self.taken_at, 0).unwrap_or_default(),
        }
    }
}
