//! Record types exchanged over HTTP and persisted by the store
//!
//! These are plain data shapes. Decoding is lenient: absent fields take
//! their zero value, only wrong JSON types or malformed syntax fail.

pub mod doctor;
pub mod id;
pub mod patient;

pub use doctor::Doctor;
pub use id::RecordId;
pub use patient::Patient;
