use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

use pixgram_core::domain::{Account, AccountStats};
use pixgram_core::error::RepoError;
use pixgram_core::ports::AccountRepository;

use crate::database::base::{SeaOrmRepository, map_db_err};
use crate::database::entity::account::{self, Entity as AccountEntity};
use crate::database::entity::{follower_connection, post};

/// SQL account repository.
pub type SqlAccountRepository = SeaOrmRepository<AccountEntity>;

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{}***", first),
                _ => "***".to_string(),
            };
            format!("{}@{}", masked_local, domain)
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl AccountRepository for SqlAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepoError> {
        tracing::debug!(%username, "Finding account by username");

        let result = AccountEntity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepoError> {
        tracing::debug!(account_email = %mask_email(email), "Finding account by email");

        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Account>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = AccountEntity::find()
            .filter(account::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), RepoError> {
        account::ActiveModel {
            id: Set(id),
            last_login: Set(Some(at.into())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(())
    }

    async fn stats(&self, id: Uuid) -> Result<AccountStats, RepoError> {
        let posts = post::Entity::find()
            .filter(post::Column::UserId.eq(id))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;
        let followers = follower_connection::Entity::find()
            .filter(follower_connection::Column::FollowingId.eq(id))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;
        let following = follower_connection::Entity::find()
            .filter(follower_connection::Column::FollowerId.eq(id))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(AccountStats {
            posts,
            followers,
            following,
        })
    }
}
