//! Patient record
//!
//! The `doctor` field is a weak reference. Only its `id` is written to the
//! `patients.doctor_id` column; the name and specialization are resolved
//! with a join whenever a patient is read back.

use serde::{Deserialize, Serialize};

use super::Doctor;

/// A patient as seen on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Patient {
    /// Generated primary key (ignored on create)
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub problem: String,
    pub contact: String,
    pub admission_date: String,
    /// Attending doctor, resolved by join on reads
    pub doctor: Doctor,
}

impl Patient {
    /// Return the same record carrying `id`.
    pub fn with_id(self, id: i32) -> Self {
        Self { id, ..self }
    }

    /// Identifier of the referenced doctor.
    pub fn doctor_id(&self) -> i32 {
        self.doctor.id
    }
}
