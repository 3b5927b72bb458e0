//! Environment loading
//!
//! `.env` has to be read before clap parses arguments (it can supply
//! `DATABASE_URL`), but tracing is only set up after parsing. The outcome is
//! therefore captured here and logged once the subscriber exists.

use std::path::PathBuf;

use tracing::{debug, warn};

/// What happened when looking for `.env` in the working directory.
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    Missing,
    Invalid(String),
}

impl From<dotenvy::Result<PathBuf>> for DotenvOutcome {
    fn from(result: dotenvy::Result<PathBuf>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(e) if e.not_found() => Self::Missing,
            Err(e) => Self::Invalid(e.to_string()),
        }
    }
}

impl DotenvOutcome {
    /// Emit the outcome through tracing.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => debug!("Loaded .env from {}", path.display()),
            Self::Missing => debug!("No .env file found, using environment only"),
            Self::Invalid(reason) => warn!("Ignoring unreadable .env: {}", reason),
        }
    }
}

/// Load `.env` from the current directory, if present.
///
/// dotenvy never overwrites variables that are already set, so the real
/// environment keeps priority.
pub fn load_dotenv() -> DotenvOutcome {
    dotenvy::dotenv().into()
}
