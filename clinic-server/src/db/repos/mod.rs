//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per operation, bound parameters only
//! - Rows decoded into `FromRow` structs by column name
//! - `get` and `delete` report missing rows as `DbError::NotFound`

use async_trait::async_trait;

pub mod doctors;
pub mod patients;

pub use doctors::DoctorRepo;
pub use patients::PatientRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: i32 },
}

/// CRUD operations for one resource.
///
/// Handlers hold an `Arc<dyn Store<R>>`, so the HTTP layer can run against
/// any implementation.
#[async_trait]
pub trait Store<R: Send + 'static>: Send + Sync {
    /// All records, empty when the table is empty.
    async fn list(&self) -> Result<Vec<R>, DbError>;

    /// The record with `id`, or `DbError::NotFound`.
    async fn get(&self, id: i32) -> Result<R, DbError>;

    /// Insert `record`, returning it with the generated id.
    async fn create(&self, record: R) -> Result<R, DbError>;

    /// Replace every mutable field of row `id`, returning `record` with `id`.
    ///
    /// A missing row is not an error.
    async fn update(&self, id: i32, record: R) -> Result<R, DbError>;

    /// Remove row `id`, or `DbError::NotFound` when nothing was removed.
    async fn delete(&self, id: i32) -> Result<(), DbError>;
}
