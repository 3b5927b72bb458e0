//! Patient repository
//!
//! Patients store only `doctor_id`. Reads JOIN doctors so the response
//! carries the doctor's current name and specialization.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{DbError, Store};
use crate::models::{Doctor, Patient};

/// Column list shared by every patient read. Doctor columns are aliased so
/// `PatientRow` decodes by name.
macro_rules! select_patients {
    () => {
        r#"
        SELECT
            p.id,
            p.name,
            p.age,
            p.gender,
            p.problem,
            p.contact,
            p.admission_date,
            d.id AS doctor_id,
            d.name AS doctor_name,
            d.specialization AS doctor_specialization
        FROM patients p
        JOIN doctors d ON d.id = p.doctor_id
        "#
    };
}

/// Patient row joined with its doctor
#[derive(Debug, Clone, FromRow)]
struct PatientRow {
    id: i32,
    name: String,
    age: i32,
    gender: String,
    problem: String,
    contact: String,
    admission_date: String,
    doctor_id: i32,
    doctor_name: String,
    doctor_specialization: String,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
            gender: row.gender,
            problem: row.problem,
            contact: row.contact,
            admission_date: row.admission_date,
            doctor: Doctor {
                id: row.doctor_id,
                name: row.doctor_name,
                specialization: row.doctor_specialization,
            },
        }
    }
}

/// Patient repository
#[derive(Clone)]
pub struct PatientRepo {
    pool: PgPool,
}

impl PatientRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store<Patient> for PatientRepo {
    async fn list(&self) -> Result<Vec<Patient>, DbError> {
        let rows: Vec<PatientRow> = sqlx::query_as(concat!(select_patients!(), "ORDER BY p.id"))
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = rows.len(), "listed patients");
        Ok(rows.into_iter().map(Patient::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Patient, DbError> {
        let row: PatientRow = sqlx::query_as(concat!(select_patients!(), "WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "patient",
                id,
            })?;

        Ok(row.into())
    }

    async fn create(&self, patient: Patient) -> Result<Patient, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO patients (name, age, gender, problem, contact, admission_date, doctor_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&patient.name)
        .bind(patient.age)
        .bind(&patient.gender)
        .bind(&patient.problem)
        .bind(&patient.contact)
        .bind(&patient.admission_date)
        .bind(patient.doctor_id())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, doctor_id = patient.doctor_id(), "created patient");
        Ok(patient.with_id(id))
    }

    async fn update(&self, id: i32, patient: Patient) -> Result<Patient, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE patients
            SET name = $1, age = $2, gender = $3, problem = $4,
                contact = $5, admission_date = $6, doctor_id = $7
            WHERE id = $8
            "#,
        )
        .bind(&patient.name)
        .bind(patient.age)
        .bind(&patient.gender)
        .bind(&patient.problem)
        .bind(&patient.contact)
        .bind(&patient.admission_date)
        .bind(patient.doctor_id())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(id, "update matched no patient");
        }

        Ok(patient.with_id(id))
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "patient",
                id,
            });
        }

        tracing::debug!(id, "deleted patient");
        Ok(())
    }
}
