use crate::db::connect;
use crate::student;
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_student_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };

    // Create
    let email = format!("test_{}@example.com", Uuid::new_v4());
    let created = student::create(&db, "Test Student", &email).await?;
    assert_eq!(created.name, "Test Student");
    assert_eq!(created.email, email);

    // Read back
    let found = student::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().email, email);

    // Merge update: only the name changes, email keeps its prior value
    let merged = student::merge_update(&db, created.id, Some("Renamed"), None).await?;
    let merged = merged.expect("row should exist");
    assert_eq!(merged.name, "Renamed");
    assert_eq!(merged.email, email);
    assert!(merged.updated_at >= created.updated_at);

    // Delete reports affected rows
    let affected = student::delete_by_id(&db, created.id).await?;
    assert_eq!(affected, 1);
    let affected = student::delete_by_id(&db, created.id).await?;
    assert_eq!(affected, 0);

    Ok(())
}

#[tokio::test]
async fn test_merge_update_missing_row_is_none() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };

    let merged = student::merge_update(&db, Uuid::new_v4(), Some("Ghost"), None).await?;
    assert!(merged.is_none());
    Ok(())
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    // Validation fires before any query, so no database is needed.
    let db = DatabaseConnection::default();
    let err = student::create(&db, "", "a@b.c").await.unwrap_err();
    assert!(matches!(err, crate::errors::ModelError::Validation(_)));
    let err = student::create(&db, "A", "not-an-email").await.unwrap_err();
    assert!(matches!(err, crate::errors::ModelError::Validation(_)));
}
