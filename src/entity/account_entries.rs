//! 账务分录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "account_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub account: String,
    pub direction: String,
    pub amount_cents: i64,
    pub reference: Option<String>,
    pub memo: Option<String>,
    pub entry_date: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_entry(self) -> crate::models::accounting::entities::AccountEntry {
        use crate::models::accounting::entities::{AccountEntry, EntryDirection};
        use chrono::{DateTime, Utc};

        AccountEntry {
            id: self.id,
            account: self.account,
            direction: self
                .direction
                .parse::<EntryDirection>()
                .unwrap_or(EntryDirection::Debit),
            amount_cents: self.amount_cents,
            reference: self.reference,
            memo: self.memo,
            entry_date: DateTime::<Utc>::from_timestamp(self.entry_date, 0).unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
