//! Doctor record

use serde::{Deserialize, Serialize};

/// A doctor as seen on the wire and in the `doctors` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Doctor {
    /// Generated primary key (ignored on create)
    pub id: i32,
    pub name: String,
    pub specialization: String,
}

impl Doctor {
    pub fn new(name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            specialization: specialization.into(),
        }
    }

    /// Return the same record carrying `id`.
    pub fn with_id(self, id: i32) -> Self {
        Self { id, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_without_id() {
        let doctor: Doctor =
            serde_json::from_value(json!({"name": "Alice", "specialization": "Cardiology"}))
                .unwrap();
        assert_eq!(doctor.id, 0);
        assert_eq!(doctor.name, "Alice");
        assert_eq!(doctor.specialization, "Cardiology");
    }

    #[test]
    fn rejects_wrong_type() {
        let result = serde_json::from_value::<Doctor>(json!({"name": 42}));
        assert!(result.is_err());
    }

    #[test]
    fn encodes_snake_case_fields() {
        let value = serde_json::to_value(Doctor::new("Alice", "Cardiology").with_id(7)).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "name": "Alice", "specialization": "Cardiology"})
        );
    }
}
