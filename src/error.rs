//! Error types for the truename library.
//!
//! This module provides the error hierarchy for truename resolution, using
//! `thiserror` for ergonomic error handling. The absence of the target path
//! is not an error; see [`crate::Truename::resolve`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a truename error.
///
/// # Examples
///
/// ```
/// use truename::Result;
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("/"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the truename library.
///
/// Exactly one variant exists per failure stage of a resolution: the
/// expansion of the input, the OS canonicalization call, and the conversion
/// of the resolved buffer back into a host string.
#[derive(Debug, Error)]
pub enum Error {
    /// Path expansion failed before the filesystem was consulted.
    ///
    /// This carries the embedding host's own failure untouched, e.g. an
    /// undeterminable home directory or an unsupported `~user` form.
    #[error("cannot expand {name:?}: {reason}")]
    Expand {
        /// The host string that could not be expanded.
        name: String,
        /// The reason expansion failed.
        reason: String,
    },

    /// The OS refused to canonicalize the path for a reason other than
    /// absence of the target (not-a-directory, permission denied, symlink
    /// loop, name too long, ...).
    #[error("cannot resolve {}: {source}", path.display())]
    Resolve {
        /// The native path handed to the OS primitive.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A resolved native buffer could not be represented as a host string.
    ///
    /// Distinguished from [`Error::Resolve`]: the OS resolved the path, but
    /// the result does not fit the host's string representation.
    #[error("cannot represent {} as a host string: {reason}", path.display())]
    Representation {
        /// The native path that could not be converted.
        path: PathBuf,
        /// The reason the conversion failed.
        reason: String,
    },
}

impl Error {
    /// Check if the error is an OS-resolution failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use std::path::PathBuf;
    /// use truename::Error;
    ///
    /// let err = Error::Resolve {
    ///     path: PathBuf::from("/restricted"),
    ///     source: io::Error::from(io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_resolve());
    /// ```
    #[must_use]
    pub fn is_resolve(&self) -> bool {
        matches!(self, Self::Resolve { .. })
    }

    /// The [`io::ErrorKind`] of an OS-resolution failure, if this is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use std::path::PathBuf;
    /// use truename::Error;
    ///
    /// let err = Error::Resolve {
    ///     path: PathBuf::from("/restricted"),
    ///     source: io::Error::from(io::ErrorKind::PermissionDenied),
    /// };
    /// assert_eq!(err.os_error_kind(), Some(io::ErrorKind::PermissionDenied));
    ///
    /// let err = Error::Expand {
    ///     name: String::from("~user"),
    ///     reason: String::from("unsupported"),
    /// };
    /// assert_eq!(err.os_error_kind(), None);
    /// ```
    #[must_use]
    pub fn os_error_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Resolve { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
