//! Conversions between host string values and native path buffers.
//!
//! The host traffics in UTF-8 strings; the OS traffics in path buffers.
//! Crossing host → native always succeeds. Crossing back can fail, because
//! the OS may resolve a path to bytes the host cannot represent; that
//! failure is its own error kind, distinct from OS-resolution errors.
//!
//! Buffers created here are plain owned values, so every exit path
//! (including early returns and errors) releases them when they go out of
//! scope.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Convert a host string into a native path buffer.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use truename::convert::to_native;
///
/// assert_eq!(to_native("/tmp/file"), PathBuf::from("/tmp/file"));
/// ```
#[must_use]
pub fn to_native(name: &str) -> PathBuf {
    PathBuf::from(name)
}

/// Convert a native path buffer back into a host string.
///
/// # Errors
///
/// Returns [`Error::Representation`] if the buffer is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use truename::convert::to_host;
///
/// assert_eq!(to_host(PathBuf::from("/tmp/file")).unwrap(), "/tmp/file");
/// ```
pub fn to_host(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|buf| Error::Representation {
            path: PathBuf::from(buf),
            reason: "native path is not valid UTF-8".to_string(),
        })
}
