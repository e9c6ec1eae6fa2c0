use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Local store capability for student identity records. The store is the
/// system of record for ids; address data never lands here.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn create(&self, name: &str, email: &str) -> Result<models::student::Model, ServiceError>;
    async fn find_all(&self) -> Result<Vec<models::student::Model>, ServiceError>;
    async fn merge_update(
        &self,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<models::student::Model>, ServiceError>;
    /// Returns whether a row was actually removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmStudentStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl StudentStore for SeaOrmStudentStore {
    async fn create(&self, name: &str, email: &str) -> Result<models::student::Model, ServiceError> {
        Ok(models::student::create(&self.db, name, email).await?)
    }

    async fn find_all(&self) -> Result<Vec<models::student::Model>, ServiceError> {
        Ok(models::student::find_all(&self.db).await?)
    }

    async fn merge_update(
        &self,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<models::student::Model>, ServiceError> {
        Ok(models::student::merge_update(&self.db, id, name, email).await?)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let affected = models::student::delete_by_id(&self.db, id).await?;
        Ok(affected > 0)
    }
}
