//! Table and index definitions derived from the entities.
//!
//! The migration crate applies these through its `SchemaManager`;
//! [`create_schema`] applies them directly (tests, `DB_AUTO_MIGRATE`).

use sea_orm::sea_query::{Index, IndexCreateStatement, TableCreateStatement};
use sea_orm::{ConnectionTrait, DbBackend, DbConn, DbErr, EntityTrait, Schema};

use super::entity::{account, comment, follower_connection, like, post, seen_post, session, story};

fn table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    stmt
}

/// `CREATE TABLE` statements in dependency order (referenced tables first).
pub fn table_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);
    vec![
        table(&schema, account::Entity),
        table(&schema, post::Entity),
        table(&schema, comment::Entity),
        table(&schema, like::Entity),
        table(&schema, seen_post::Entity),
        table(&schema, story::Entity),
        table(&schema, follower_connection::Entity),
        table(&schema, session::Entity),
    ]
}

/// Table names in reverse dependency order, for teardown.
pub fn table_names() -> Vec<&'static str> {
    vec![
        "sessions",
        "follower_connections",
        "stories",
        "seen_posts",
        "likes",
        "comments",
        "posts",
        "accounts",
    ]
}

/// Unique pair constraints plus the indexes the listings filter on.
pub fn index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("uq_likes_user_post")
            .table(like::Entity)
            .col(like::Column::UserId)
            .col(like::Column::PostId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("uq_seen_posts_user_post")
            .table(seen_post::Entity)
            .col(seen_post::Column::UserId)
            .col(seen_post::Column::PostId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("uq_follower_connections_pair")
            .table(follower_connection::Entity)
            .col(follower_connection::Column::FollowerId)
            .col(follower_connection::Column::FollowingId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_posts_user_created")
            .table(post::Entity)
            .col(post::Column::UserId)
            .col(post::Column::CreatedAt)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_comments_post")
            .table(comment::Entity)
            .col(comment::Column::PostId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_stories_user_created")
            .table(story::Entity)
            .col(story::Column::UserId)
            .col(story::Column::CreatedAt)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_sessions_expires")
            .table(session::Entity)
            .col(session::Column::ExpiresAt)
            .if_not_exists()
            .to_owned(),
    ]
}

/// Create every table and index that does not exist yet.
pub async fn create_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for stmt in table_statements(backend) {
        db.execute(backend.build(&stmt)).await?;
    }
    for stmt in index_statements() {
        db.execute(backend.build(&stmt)).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
