//! Login session entity for SeaORM.
//!
//! | Column     | Type               | Description                  |
//! |------------|--------------------|------------------------------|
//! | id         | TEXT (Primary Key) | Opaque token from the cookie |
//! | account_id | UUID               | Logged-in account            |
//! | expires_at | TIMESTAMPTZ        | Session expiration timestamp |

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub account_id: Uuid,
    pub expires_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Account,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for pixgram_core::domain::Session {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            account_id: model.account_id,
            expires_at: model.expires_at.into(),
        }
    }
}

impl From<pixgram_core::domain::Session> for ActiveModel {
    fn from(session: pixgram_core::domain::Session) -> Self {
        Self {
            id: Set(session.id),
            account_id: Set(session.account_id),
            expires_at: Set(session.expires_at.into()),
        }
    }
}
