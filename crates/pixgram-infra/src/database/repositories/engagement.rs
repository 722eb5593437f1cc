use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use pixgram_core::domain::{Like, LikeState, SeenPost};
use pixgram_core::error::RepoError;
use pixgram_core::ports::EngagementRepository;

use crate::database::base::{SeaOrmRepository, map_db_err};
use crate::database::entity::like::{self, Entity as LikeEntity};
use crate::database::entity::seen_post;

/// SQL repository for likes and seen-marks.
///
/// Both tables carry a unique (user_id, post_id) index, so concurrent
/// identical requests cannot leave duplicate rows behind.
pub type SqlEngagementRepository = SeaOrmRepository<LikeEntity>;

#[async_trait]
impl EngagementRepository for SqlEngagementRepository {
    async fn toggle_like(&self, user_id: Uuid, post_id: Uuid) -> Result<LikeState, RepoError> {
        let removed = LikeEntity::delete_many()
            .filter(like::Column::UserId.eq(user_id))
            .filter(like::Column::PostId.eq(post_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if removed.rows_affected > 0 {
            tracing::debug!(%user_id, %post_id, "Like removed");
            return Ok(LikeState::Unliked);
        }

        // A racing request may have inserted the same row meanwhile; either
        // way the pair ends up liked.
        let inserted = LikeEntity::insert(like::ActiveModel::from(Like::new(user_id, post_id)))
            .on_conflict(
                OnConflict::columns([like::Column::UserId, like::Column::PostId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(%user_id, %post_id, inserted, "Like added");
        Ok(LikeState::Liked)
    }

    async fn mark_seen(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, RepoError> {
        let inserted = seen_post::Entity::insert(seen_post::ActiveModel::from(SeenPost::new(
            user_id, post_id,
        )))
        .on_conflict(
            OnConflict::columns([seen_post::Column::UserId, seen_post::Column::PostId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(inserted > 0)
    }
}
