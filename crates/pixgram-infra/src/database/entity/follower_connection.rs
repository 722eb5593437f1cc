//! Follower edge entity for SeaORM. Unique per (follower_id, following_id).

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follower_connections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The account doing the following.
    pub follower_id: Uuid,
    /// The account being followed.
    pub following_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::FollowerId",
        to = "super::account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::FollowingId",
        to = "super::account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Following,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for pixgram_core::domain::FollowerConnection {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            follower_id: model.follower_id,
            following_id: model.following_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<pixgram_core::domain::FollowerConnection> for ActiveModel {
    fn from(edge: pixgram_core::domain::FollowerConnection) -> Self {
        Self {
            id: Set(edge.id),
            follower_id: Set(edge.follower_id),
            following_id: Set(edge.following_id),
            created_at: Set(edge.created_at.into()),
        }
    }
}
