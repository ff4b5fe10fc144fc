use std::{fmt, io, str::Utf8Error};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`read_utf8_file`](crate::read_utf8_file) and friends.
///
/// Every variant except [`Error::UnsupportedFileEncoding`] and [`Error::Io`]
/// is raised before the file is touched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected 1 or 2 arguments (string[, object]), but got no arguments.")]
    MissingArguments,

    #[error("Expected 1 or 2 arguments (string[, object]), but got {0} arguments.")]
    TooManyArguments(usize),

    #[error(
        "Expected a file path (string, Buffer, Uint8Array, file URL or file descriptor) to read its contents, but got {0}."
    )]
    InvalidArgType(String),

    #[error(
        "Expected a valid file path to read its contents, which must include at least one character, but got {0}."
    )]
    InvalidPathValue(EmptyPathKind),

    #[error("Expected a file path without null bytes, but got {0}.")]
    NulInPath(String),

    #[error(
        "read-utf8-file doesn't support reading from FD 0 (stdin), FD 1 (stdout) nor FD 2 (stderr), but got {0} (number)."
    )]
    UnsupportedDescriptor(i32),

    #[error("Expected a file descriptor to be a non-negative 32-bit integer, but got {0}.")]
    InvalidDescriptor(String),

    #[error("Expected a URL with the file: scheme pointing at a local path, but got {0}.")]
    InvalidFileUrl(String),

    #[error("The second argument of read-utf8-file must be a plain object, but got {0}.")]
    InvalidOptionsType(String),

    #[error(
        "read-utf8-file does not support `encoding` option because it only supports UTF-8 by design, but {0} was provided."
    )]
    UnsupportedEncodingOption(String),

    #[error(
        "`flag` option must be valid file open flag, for example 'r' & 'ax+', but got '' (empty string)."
    )]
    InvalidFlagValue,

    #[error("Unknown file open flag: {0}")]
    UnknownFlag(String),

    #[error(
        "`flag` option must be valid file open flag (string), for example 'r' & 'ax+', but got {0}."
    )]
    InvalidFlagType(String),

    #[error("Expected a UTF-8 file, but the file at {path} is not UTF-8 encoded.")]
    UnsupportedFileEncoding {
        path: String,
        #[source]
        source: Utf8Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingArguments,
    TooManyArguments,
    InvalidArgType,
    InvalidArgValue,
    InvalidOptionsType,
    UnsupportedEncodingOption,
    InvalidOptValue,
    InvalidOptType,
    UnsupportedFileEncoding,
    Io(io::ErrorKind),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingArguments => ErrorKind::MissingArguments,
            Error::TooManyArguments(_) => ErrorKind::TooManyArguments,
            Error::InvalidArgType(_) => ErrorKind::InvalidArgType,
            Error::InvalidPathValue(_)
            | Error::NulInPath(_)
            | Error::UnsupportedDescriptor(_)
            | Error::InvalidDescriptor(_)
            | Error::InvalidFileUrl(_) => ErrorKind::InvalidArgValue,
            Error::InvalidOptionsType(_) => ErrorKind::InvalidOptionsType,
            Error::UnsupportedEncodingOption(_) => ErrorKind::UnsupportedEncodingOption,
            Error::InvalidFlagValue | Error::UnknownFlag(_) => ErrorKind::InvalidOptValue,
            Error::InvalidFlagType(_) => ErrorKind::InvalidOptType,
            Error::UnsupportedFileEncoding { .. } => ErrorKind::UnsupportedFileEncoding,
            Error::Io(err) => ErrorKind::Io(err.kind()),
        }
    }

    /// The underlying I/O error, untouched, when the failure came from the OS.
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Which empty representation of a path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPathKind {
    String,
    Buffer,
    Uint8Array,
}

impl fmt::Display for EmptyPathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyPathKind::String => f.write_str("'' (empty string)"),
            EmptyPathKind::Buffer => f.write_str("an empty Buffer"),
            EmptyPathKind::Uint8Array => f.write_str("an empty Uint8Array"),
        }
    }
}
