//! Doctor repository

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{DbError, Store};
use crate::models::Doctor;

/// Doctor row from database
#[derive(Debug, Clone, FromRow)]
struct DoctorRow {
    id: i32,
    name: String,
    specialization: String,
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            specialization: row.specialization,
        }
    }
}

/// Doctor repository
#[derive(Clone)]
pub struct DoctorRepo {
    pool: PgPool,
}

impl DoctorRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<Doctor> for DoctorRepo {
    async fn list(&self) -> Result<Vec<Doctor>, DbError> {
        let rows: Vec<DoctorRow> =
            sqlx::query_as("SELECT id, name, specialization FROM doctors ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        tracing::debug!(count = rows.len(), "listed doctors");
        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Doctor, DbError> {
        let row: DoctorRow =
            sqlx::query_as("SELECT id, name, specialization FROM doctors WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(DbError::NotFound {
                    resource: "doctor",
                    id,
                })?;

        Ok(row.into())
    }

    async fn create(&self, doctor: Doctor) -> Result<Doctor, DbError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO doctors (name, specialization) VALUES ($1, $2) RETURNING id",
        )
        .bind(&doctor.name)
        .bind(&doctor.specialization)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "created doctor");
        Ok(doctor.with_id(id))
    }

    async fn update(&self, id: i32, doctor: Doctor) -> Result<Doctor, DbError> {
        let result = sqlx::query("UPDATE doctors SET name = $1, specialization = $2 WHERE id = $3")
            .bind(&doctor.name)
            .bind(&doctor.specialization)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(id, "update matched no doctor");
        }

        Ok(doctor.with_id(id))
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "doctor",
                id,
            });
        }

        tracing::debug!(id, "deleted doctor");
        Ok(())
    }
}
