//! Write path for inspection records.
//!
//! Each mutation runs a single statement inside its own transaction: commit
//! on success, rollback and [`AppError::Store`] on failure. Nothing is retried.

use sqlx::PgPool;

use crate::config::PlantScope;
use crate::error::AppError;
use crate::models::fields::{FieldError, InspectionFields};
use crate::repositories::{
    begin_transaction, commit_transaction, rollback_transaction, InspectionRepository,
};
use crate::services::finalization::InspectionUpdate;

pub struct InspectionService<'a> {
    db: &'a PgPool,
    repo: InspectionRepository<'a>,
}

impl<'a> InspectionService<'a> {
    pub fn new(db: &'a PgPool, scope: &'a PlantScope) -> Self {
        Self {
            db,
            repo: InspectionRepository::new(scope),
        }
    }

    /// Inserts exactly the supplied columns and returns the new id.
    pub async fn create(&self, fields: InspectionFields) -> Result<i32, AppError> {
        if fields.is_empty() {
            return Err(FieldError::Empty.into());
        }

        let mut tx = begin_transaction(self.db).await?;
        match self.repo.insert(&mut *tx, &fields).await {
            Ok(id) => {
                commit_transaction(tx).await?;
                tracing::info!(id, columns = fields.len(), "Inspection created");
                Ok(id)
            }
            Err(err) => {
                rollback_transaction(tx).await;
                Err(AppError::store(err))
            }
        }
    }

    pub async fn update(&self, id: i32, fields: InspectionFields) -> Result<(), AppError> {
        let update = InspectionUpdate::prepare(fields)?;

        let mut tx = begin_transaction(self.db).await?;
        match self
            .repo
            .update(&mut *tx, id, &update.fields, update.stamp_finalized)
            .await
        {
            Ok(rows) => {
                commit_transaction(tx).await?;
                if rows == 0 {
                    tracing::debug!(id, "Update matched no inspection");
                } else {
                    tracing::info!(
                        id,
                        columns = update.fields.len(),
                        finalized = update.stamp_finalized,
                        "Inspection updated"
                    );
                }
                Ok(())
            }
            Err(err) => {
                rollback_transaction(tx).await;
                Err(AppError::store(err))
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = begin_transaction(self.db).await?;
        match self.repo.delete(&mut *tx, id).await {
            Ok(rows) => {
                commit_transaction(tx).await?;
                tracing::info!(id, rows, "Inspection deleted");
                Ok(())
            }
            Err(err) => {
                rollback_transaction(tx).await;
                Err(AppError::store(err))
            }
        }
    }
}
