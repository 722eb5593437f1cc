use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use pixgram_core::domain::{Page, PageRequest, Story};
use pixgram_core::error::RepoError;
use pixgram_core::ports::StoryRepository;

use crate::database::base::{SeaOrmRepository, fetch_page};
use crate::database::entity::follower_connection;
use crate::database::entity::story::{self, Entity as StoryEntity};

/// SQL story repository.
pub type SqlStoryRepository = SeaOrmRepository<StoryEntity>;

fn newest_first() -> Select<StoryEntity> {
    StoryEntity::find()
        .order_by_desc(story::Column::CreatedAt)
        .order_by_desc(story::Column::Id)
}

#[async_trait]
impl StoryRepository for SqlStoryRepository {
    async fn visible_to(
        &self,
        account_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<Story>, RepoError> {
        let followed = Query::select()
            .column(follower_connection::Column::FollowingId)
            .from(follower_connection::Entity)
            .and_where(follower_connection::Column::FollowerId.eq(account_id))
            .to_owned();

        let select = newest_first().filter(
            Condition::any()
                .add(story::Column::UserId.eq(account_id))
                .add(story::Column::UserId.in_subquery(followed)),
        );
        fetch_page(&self.db, select, page).await
    }

    async fn by_owner_since(
        &self,
        owner_id: Uuid,
        cutoff: DateTime<Utc>,
        page: PageRequest,
    ) -> Result<Page<Story>, RepoError> {
        let cutoff: sea_orm::prelude::DateTimeWithTimeZone = cutoff.into();
        let select = newest_first()
            .filter(story::Column::UserId.eq(owner_id))
            .filter(story::Column::CreatedAt.gte(cutoff));
        fetch_page(&self.db, select, page).await
    }
}
