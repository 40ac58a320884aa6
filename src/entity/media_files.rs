//! 媒体文件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "media_files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub owner_id: i64,
    pub original_name: String,
    pub stored_name: String,
    #[sea_orm(unique)]
    pub download_token: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_media_file(self) -> crate::models::media::entities::MediaFile {
        use chrono::{DateTime, Utc};

        crate::models::media::entities::MediaFile {
            id: self.id,
            owner_id: self.owner_id,
            original_name: self.original_name,
            stored_name: self.stored_name,
            download_token: self.download_token,
            file_size: self.file_size,
            file_type: self.file_type,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
