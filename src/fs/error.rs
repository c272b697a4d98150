use core::fmt;

/// Namespace error types. All recoverable; the shell renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    NotFound,
    NotADirectory,
    AlreadyExists,
    AtCapacity,
    ParentNotFound,
    ParentNotADirectory,
    InvalidPath,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FsError::NotFound => write!(f, "No such directory"),
            FsError::NotADirectory => write!(f, "Not a directory"),
            FsError::AlreadyExists => write!(f, "File exists"),
            FsError::AtCapacity => write!(f, "No space left in namespace"),
            FsError::ParentNotFound => write!(f, "Parent directory not found"),
            FsError::ParentNotADirectory => write!(f, "Parent is not a directory"),
            FsError::InvalidPath => write!(f, "Invalid path"),
        }
    }
}

pub type FsResult<T> = Result<T, FsError>;
