//! Route handlers organized by resource

pub mod doctors;
pub mod health;
pub mod patients;
