use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use pixgram_core::domain::{Comment, Page, PageRequest};
use pixgram_core::error::RepoError;
use pixgram_core::ports::CommentRepository;

use crate::database::base::{SeaOrmRepository, fetch_page, map_db_err};
use crate::database::entity::comment::{self, Entity as CommentEntity};

/// SQL comment repository.
pub type SqlCommentRepository = SeaOrmRepository<CommentEntity>;

#[async_trait]
impl CommentRepository for SqlCommentRepository {
    async fn for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_desc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn by_author(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<Comment>, RepoError> {
        let select = CommentEntity::find()
            .filter(comment::Column::UserId.eq(user_id))
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_desc(comment::Column::Id);

        fetch_page(&self.db, select, page).await
    }
}
