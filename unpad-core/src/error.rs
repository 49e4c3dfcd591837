use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status reported for conditions the tool detects itself.
pub const EXIT_REJECTED: u8 = 2;

/// Exit status reported for I/O failures the tool does not recover from.
pub const EXIT_IO: u8 = 1;

#[derive(Error, Debug)]
pub enum UnpackError {
    /// Input path is missing or is not a regular file.
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// No `\x7FELF` anywhere in the input bytes.
    #[error("no ELF header found in {}", .0.display())]
    MagicNotFound(PathBuf),

    /// The OS message is left to the `source` chain.
    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl UnpackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        UnpackError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            UnpackError::InputNotFound(_) | UnpackError::MagicNotFound(_) => EXIT_REJECTED,
            UnpackError::Io { .. } => EXIT_IO,
        }
    }
}
