//! Path identifier parsing

use std::fmt;
use std::str::FromStr;

/// Primary key of a stored record, parsed from a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(i32);

/// The path segment is not a valid key.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid id '{value}': must be an integer")]
pub struct InvalidId {
    pub value: String,
}

impl RecordId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for RecordId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self).map_err(|_| InvalidId {
            value: s.to_owned(),
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
