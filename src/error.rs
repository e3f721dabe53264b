//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Sector table has no root entry (every descriptor names a parent).
    MissingRoot,
    /// Sector table has more than one root entry.
    MultipleRoots {
        /// Id of the first root encountered.
        first: u64,
        /// Id of the conflicting second root.
        second: u64,
    },
    /// Two descriptors share the same sector id.
    DuplicateSector(u64),
    /// A descriptor names a parent id that is not in the table.
    UnknownParent {
        /// Id of the descriptor with the bad reference.
        sector: u64,
        /// The missing parent id.
        parent: u64,
    },
    /// Descriptors not reachable from the root (orphaned subtrees or cycles).
    UnreachableSectors(usize),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// JSON camera-state parsing/serialization failure.
    CameraState(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRoot => {
                write!(f, "sector table has no root entry")
            }
            Self::MultipleRoots { first, second } => {
                write!(
                    f,
                    "sector table has multiple roots: {first} and {second}"
                )
            }
            Self::DuplicateSector(id) => {
                write!(f, "duplicate sector id: {id}")
            }
            Self::UnknownParent { sector, parent } => {
                write!(f, "sector {sector} references unknown parent {parent}")
            }
            Self::UnreachableSectors(count) => {
                write!(f, "{count} sectors unreachable from the root")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::CameraState(msg) => {
                write!(f, "camera state error: {msg}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
