use std::fmt;

use thiserror::Error;

/// Failure while fetching the users document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Which fetch a [`RowError::FetchFailed`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    InitialLoad,
    Search,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialLoad => f.write_str("Failed to load users"),
            Self::Search => f.write_str("Failed to search users"),
        }
    }
}

/// The single user-visible error of the users table.
///
/// Never fatal: the table keeps rendering whatever displayed set it has.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Nothing found")]
    NoResults,
    #[error("{phase}")]
    FetchFailed { phase: FetchPhase, source: FetchError },
}

impl RowError {
    pub fn fetch_failed(phase: FetchPhase, source: FetchError) -> Self {
        Self::FetchFailed { phase, source }
    }
}
