use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use pixgram_core::domain::{FollowSide, FollowerConnection, Page, PageRequest};
use pixgram_core::error::RepoError;
use pixgram_core::ports::FollowRepository;

use crate::database::base::{SeaOrmRepository, fetch_page, map_db_err};
use crate::database::entity::follower_connection::{self, Entity as FollowEntity};

/// SQL repository for follower edges.
pub type SqlFollowRepository = SeaOrmRepository<FollowEntity>;

#[async_trait]
impl FollowRepository for SqlFollowRepository {
    async fn follow(
        &self,
        edge: FollowerConnection,
    ) -> Result<(FollowerConnection, bool), RepoError> {
        let (follower_id, following_id) = (edge.follower_id, edge.following_id);

        let inserted = FollowEntity::insert(follower_connection::ActiveModel::from(edge.clone()))
            .on_conflict(
                OnConflict::columns([
                    follower_connection::Column::FollowerId,
                    follower_connection::Column::FollowingId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        if inserted > 0 {
            tracing::info!(%follower_id, %following_id, "Follower edge created");
            return Ok((edge, true));
        }

        let existing = FollowEntity::find()
            .filter(follower_connection::Column::FollowerId.eq(follower_id))
            .filter(follower_connection::Column::FollowingId.eq(following_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        Ok((existing.into(), false))
    }

    async fn unfollow(&self, follower_id: Uuid, following_id: Uuid) -> Result<bool, RepoError> {
        let result = FollowEntity::delete_many()
            .filter(follower_connection::Column::FollowerId.eq(follower_id))
            .filter(follower_connection::Column::FollowingId.eq(following_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn following_ids(&self, account_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
        FollowEntity::find()
            .select_only()
            .column(follower_connection::Column::FollowingId)
            .filter(follower_connection::Column::FollowerId.eq(account_id))
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn edges(
        &self,
        account_id: Uuid,
        side: FollowSide,
        page: PageRequest,
    ) -> Result<Page<FollowerConnection>, RepoError> {
        let subject = match side {
            FollowSide::Followers => follower_connection::Column::FollowingId,
            FollowSide::Following => follower_connection::Column::FollowerId,
        };

        let select = FollowEntity::find()
            .filter(subject.eq(account_id))
            .order_by_desc(follower_connection::Column::CreatedAt)
            .order_by_desc(follower_connection::Column::Id);
        fetch_page(&self.db, select, page).await
    }
}
