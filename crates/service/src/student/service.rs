use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::address::AddressClient;
use crate::errors::ServiceError;
use crate::student::repository::StudentStore;

/// Read-time join of a local student record with its remote address.
/// Assembled per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub address: String,
}

impl StudentView {
    fn assemble(record: models::student::Model, address: String) -> Self {
        Self { id: record.id, name: record.name, email: record.email, address }
    }
}

/// Aggregation service over the two injected capabilities: the local student
/// store and the remote address client. Mutations always write locally first,
/// so the address service never learns about an id that does not exist in the
/// store; the local write is not rolled back when the remote call fails.
pub struct StudentService<S: StudentStore, A: AddressClient> {
    store: Arc<S>,
    addresses: Arc<A>,
}

impl<S: StudentStore, A: AddressClient> StudentService<S, A> {
    pub fn new(store: Arc<S>, addresses: Arc<A>) -> Self {
        Self { store, addresses }
    }

    /// All students, each joined with its address. Fetches run sequentially,
    /// one GET per record; the first failure aborts the whole listing so a
    /// partial list is never returned.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<StudentView>, ServiceError> {
        let records = self.store.find_all().await?;
        let mut views = Vec::with_capacity(records.len());
        for record in records {
            let id = record.id;
            let rec = self.addresses.get(id).await.map_err(|e| {
                error!(operation = "list", student_id = %id, err = %e, "address lookup failed");
                e
            })?;
            views.push(StudentView::assemble(record, rec.address));
        }
        info!(count = views.len(), "listed students");
        Ok(views)
    }

    #[instrument(skip(self, address))]
    pub async fn create(&self, name: &str, email: &str, address: &str) -> Result<StudentView, ServiceError> {
        let record = self.store.create(name, email).await?;
        // If the POST fails the freshly inserted record stays in place.
        let rec = self.addresses.post(record.id, address).await.map_err(|e| {
            error!(operation = "create", student_id = %record.id, err = %e, "address push failed");
            e
        })?;
        info!(student_id = %record.id, name = %record.name, email = %record.email, "student created");
        Ok(StudentView::assemble(record, rec.address))
    }

    /// Partial update: provided fields overwrite, omitted fields keep their
    /// prior values. A missing id fails before any remote call is made.
    #[instrument(skip(self, name, email, address))]
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        address: Option<&str>,
    ) -> Result<StudentView, ServiceError> {
        let merged = self.store.merge_update(id, name, email).await?;
        let Some(record) = merged else {
            error!(operation = "update", student_id = %id, "student not found");
            return Err(ServiceError::not_found(&format!("student {}", id)));
        };
        let rec = self.addresses.put(id, address).await.map_err(|e| {
            error!(operation = "update", student_id = %id, err = %e, "address push failed");
            e
        })?;
        info!(student_id = %id, "student updated");
        Ok(StudentView::assemble(record, rec.address))
    }

    /// Delete locally, then tell the address service. Zero affected rows is
    /// NotFound and short-circuits the remote call.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        let deleted = self.store.delete_by_id(id).await?;
        if !deleted {
            error!(operation = "remove", student_id = %id, "student not found");
            return Err(ServiceError::not_found(&format!("student {}", id)));
        }
        self.addresses.delete(id).await.map_err(|e| {
            error!(operation = "remove", student_id = %id, err = %e, "address delete failed");
            e
        })?;
        info!(student_id = %id, "student removed");
        Ok(())
    }
}
