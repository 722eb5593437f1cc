use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use pixgram_core::domain::Session;
use pixgram_core::error::RepoError;
use pixgram_core::ports::SessionStore;

use crate::database::base::{SeaOrmRepository, map_db_err};
use crate::database::entity::session::{self, Entity as SessionEntity};

/// Session store backed by the `sessions` table.
pub type SqlSessionStore = SeaOrmRepository<SessionEntity>;

fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

#[async_trait]
impl SessionStore for SqlSessionStore {
    async fn create(&self, session: Session) -> Result<Session, RepoError> {
        let model = session::ActiveModel::from(session)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn load(&self, id: &str) -> Result<Option<Session>, RepoError> {
        let result = SessionEntity::find_by_id(id.to_string())
            .filter(session::Column::ExpiresAt.gt(now()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        SessionEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, RepoError> {
        let result = SessionEntity::delete_many()
            .filter(session::Column::ExpiresAt.lte(now()))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
