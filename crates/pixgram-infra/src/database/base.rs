use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, Select, SqlErr,
};

use pixgram_core::domain::{Page, PageRequest};
use pixgram_core::error::RepoError;
use pixgram_core::ports::BaseRepository;

/// Generic SeaORM repository implementation, specialised per entity in `repositories`.
pub struct SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> Clone for SeaOrmRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

/// Translate a SeaORM error into the repository error taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// Run `select` as one page: a `COUNT` over the whole set plus the page itself.
///
/// Pages past the end come back empty and never reach the offset arithmetic.
pub(crate) async fn fetch_page<E, T>(
    db: &DbConn,
    select: Select<E>,
    request: PageRequest,
) -> Result<Page<T>, RepoError>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    T: From<E::Model>,
{
    let paginator = select.paginate(db, request.size);
    let total = paginator.num_items().await.map_err(map_db_err)?;

    let empty = Page::new(Vec::new(), total, request);
    if empty.is_out_of_range() || total == 0 {
        return Ok(empty);
    }

    let items = paginator
        .fetch_page(request.index())
        .await
        .map_err(map_db_err)?;

    Ok(Page::new(
        items.into_iter().map(Into::into).collect(),
        total,
        request,
    ))
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&self.db).await.map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
