//! Schema bootstrap
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS` run once before serving.

use sqlx::PgPool;

/// Create the doctors and patients tables if they are missing.
///
/// `patients.doctor_id` references `doctors(id)` without cascade: removing
/// a patient never touches its doctor, and a doctor that still has patients
/// cannot be removed.
pub async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Bootstrapping schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS doctors (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            specialization TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS patients (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            gender TEXT NOT NULL,
            problem TEXT NOT NULL,
            contact TEXT NOT NULL,
            admission_date TEXT NOT NULL,
            doctor_id INTEGER NOT NULL REFERENCES doctors(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_patients_doctor_id ON patients(doctor_id)")
        .execute(pool)
        .await?;

    tracing::info!("Schema ready");
    Ok(())
}
