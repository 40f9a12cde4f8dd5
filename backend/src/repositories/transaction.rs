//! Transaction helpers for the write path.
//!
//! Every create, update and delete runs as one statement inside its own
//! transaction. Failures surface as [`AppError::Store`] carrying the store's
//! message.

use crate::error::AppError;
use sqlx::postgres::PgTransaction;
use sqlx::PgPool;

/// Checks out a pooled connection and opens a transaction on it.
pub async fn begin_transaction(db: &PgPool) -> Result<PgTransaction<'_>, AppError> {
    db.begin().await.map_err(AppError::store)
}

pub async fn commit_transaction(tx: PgTransaction<'_>) -> Result<(), AppError> {
    tx.commit().await.map_err(AppError::store)
}

/// Rolls back after a failed statement. A failing rollback is only logged so
/// the caller still reports the statement's own error; the connection is
/// discarded by the pool in that case.
pub async fn rollback_transaction(tx: PgTransaction<'_>) {
    if let Err(err) = tx.rollback().await {
        tracing::warn!(error = %err, "Rollback failed");
    }
}
