use migration::{Migrator, MigratorTrait, SchemaManager};
use pixgram_infra::{DatabaseConfig, connect};

#[tokio::test]
async fn test_up_then_down() {
    let config = DatabaseConfig {
        auto_migrate: false,
        ..DatabaseConfig::in_memory()
    };
    let db = connect(&config).await.unwrap();

    Migrator::up(&db, None).await.unwrap();
    let manager = SchemaManager::new(&db);
    for table in ["accounts", "posts", "likes", "follower_connections", "sessions"] {
        assert!(manager.has_table(table).await.unwrap(), "{table}");
    }

    // Applying again is a no-op.
    Migrator::up(&db, None).await.unwrap();

    Migrator::down(&db, None).await.unwrap();
    assert!(!manager.has_table("posts").await.unwrap());
    assert!(!manager.has_table("accounts").await.unwrap());
}
