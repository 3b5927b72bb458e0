//! Store adapter - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - One shared connection pool, cloned into handlers - no Arc<Mutex<Connection>>
//! - Bound parameters only - never string-built SQL
//! - Rows decoded by column name, not position
//! - Patient reads JOIN doctors - the doctor is never stored twice

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::connect;
pub use repos::*;
