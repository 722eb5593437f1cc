use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};
use uuid::Uuid;

use pixgram_core::domain::{Page, PageRequest, Post, PostStats};
use pixgram_core::error::RepoError;
use pixgram_core::ports::PostRepository;

use crate::database::base::{SeaOrmRepository, fetch_page, map_db_err};
use crate::database::entity::post::{self, Entity as PostEntity};
use crate::database::entity::{comment, follower_connection, like, seen_post};

/// SQL post repository.
pub type SqlPostRepository = SeaOrmRepository<PostEntity>;

fn newest_first() -> Select<PostEntity> {
    PostEntity::find()
        .order_by_desc(post::Column::CreatedAt)
        .order_by_desc(post::Column::Id)
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn list(&self, page: PageRequest) -> Result<Page<Post>, RepoError> {
        fetch_page(&self.db, newest_first(), page).await
    }

    async fn feed(&self, account_id: Uuid, page: PageRequest) -> Result<Page<Post>, RepoError> {
        let followed = Query::select()
            .column(follower_connection::Column::FollowingId)
            .from(follower_connection::Entity)
            .and_where(follower_connection::Column::FollowerId.eq(account_id))
            .to_owned();

        let select = newest_first().filter(post::Column::UserId.in_subquery(followed));
        fetch_page(&self.db, select, page).await
    }

    async fn by_owner(&self, owner_id: Uuid, page: PageRequest) -> Result<Page<Post>, RepoError> {
        let select = newest_first().filter(post::Column::UserId.eq(owner_id));
        fetch_page(&self.db, select, page).await
    }

    async fn by_owners(
        &self,
        owner_ids: &[Uuid],
        page: PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        if owner_ids.is_empty() {
            return Ok(Page::new(Vec::new(), 0, page));
        }

        let select =
            newest_first().filter(post::Column::UserId.is_in(owner_ids.iter().copied()));
        fetch_page(&self.db, select, page).await
    }

    async fn liked_by(
        &self,
        account_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        let liked = Query::select()
            .column(like::Column::PostId)
            .from(like::Entity)
            .and_where(like::Column::UserId.eq(account_id))
            .to_owned();

        let select = newest_first().filter(post::Column::Id.in_subquery(liked));
        fetch_page(&self.db, select, page).await
    }

    async fn stats(
        &self,
        post_ids: &[Uuid],
        viewer: Option<Uuid>,
    ) -> Result<HashMap<Uuid, PostStats>, RepoError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let likes =
            counts_by_post::<like::Entity>(&self.db, like::Column::PostId, post_ids).await?;
        let comments =
            counts_by_post::<comment::Entity>(&self.db, comment::Column::PostId, post_ids).await?;
        let seen =
            counts_by_post::<seen_post::Entity>(&self.db, seen_post::Column::PostId, post_ids)
                .await?;

        let liked: HashSet<Uuid> = match viewer {
            Some(viewer) => like::Entity::find()
                .select_only()
                .column(like::Column::PostId)
                .filter(like::Column::UserId.eq(viewer))
                .filter(like::Column::PostId.is_in(post_ids.iter().copied()))
                .into_tuple::<Uuid>()
                .all(&self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        let count = |counts: &HashMap<Uuid, u64>, id: &Uuid| counts.get(id).copied().unwrap_or(0);

        Ok(post_ids
            .iter()
            .map(|id| {
                let stats = PostStats {
                    likes: count(&likes, id),
                    comments: count(&comments, id),
                    seen: count(&seen, id),
                    liked_by_viewer: liked.contains(id),
                };
                (*id, stats)
            })
            .collect())
    }
}

/// Row counts of `E` grouped by its post column, one query for the whole batch.
/// Posts without rows are absent from the map.
async fn counts_by_post<E: EntityTrait>(
    db: &DbConn,
    post_column: E::Column,
    post_ids: &[Uuid],
) -> Result<HashMap<Uuid, u64>, RepoError> {
    let rows: Vec<(Uuid, i64)> = E::find()
        .select_only()
        .column(post_column)
        .column_as(Expr::col(post_column).count(), "count")
        .filter(post_column.is_in(post_ids.iter().copied()))
        .group_by(post_column)
        .into_tuple()
        .all(db)
        .await
        .map_err(map_db_err)?;

    Ok(rows
        .into_iter()
        .map(|(id, n)| (id, u64::try_from(n).unwrap_or(0)))
        .collect())
}
