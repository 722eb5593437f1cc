//! Story entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub image: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::UserId",
        to = "super::account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for pixgram_core::domain::Story {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            image: model.image,
            created_at: model.created_at.into(),
        }
    }
}

impl From<pixgram_core::domain::Story> for ActiveModel {
    fn from(story: pixgram_core::domain::Story) -> Self {
        Self {
            id: Set(story.id),
            user_id: Set(story.user_id),
            image: Set(story.image),
            created_at: Set(story.created_at.into()),
        }
    }
}
