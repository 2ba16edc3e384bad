use std::fmt;

/// Failure produced at the Remote Catalog Source boundary.
///
/// An absent record is not a failure: `fetch_detail` reports it as
/// `Ok(None)` and the detail view renders its own not-found state. Likewise
/// an exhausted catalog is ordinary accumulator state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The query service could not be reached or answered with a failure
    Transport(String),
    /// The service answered, but the payload did not match the expected shape
    Decode(String),
}

/// Errors raised while loading the bundled fixture records
#[derive(Debug)]
pub enum FixtureDataError {
    /// The fixture data directory does not exist
    MissingDataDir(String),
    /// A fixture file could not be read
    Io(std::io::Error),
    /// A fixture file is not a valid record
    Malformed { file: String, details: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Transport(details) => write!(f, "transport failure: {}", details),
            SourceError::Decode(details) => write!(f, "malformed query result: {}", details),
        }
    }
}

impl fmt::Display for FixtureDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureDataError::MissingDataDir(path) => {
                write!(f, "fixture data directory not found: {}", path)
            }
            FixtureDataError::Io(err) => write!(f, "fixture data unreadable: {}", err),
            FixtureDataError::Malformed { file, details } => {
                write!(f, "malformed fixture record {}: {}", file, details)
            }
        }
    }
}

impl std::error::Error for SourceError {}
impl std::error::Error for FixtureDataError {}

impl From<std::io::Error> for FixtureDataError {
    fn from(err: std::io::Error) -> Self {
        FixtureDataError::Io(err)
    }
}

/// Type alias for Results at the source boundary
pub type SourceResult<T> = Result<T, SourceError>;

/// Type alias for Results of fixture data loading
pub type FixtureResult<T> = Result<T, FixtureDataError>;
