//! The services the resolver consumes from its embedding host.
//!
//! The original host exposes these as three interned, garbage-collected
//! symbols looked up once at module load. Here they are a trait: the
//! resolver holds one handle to an implementation for its whole lifetime,
//! with no ownership cycles and no mutation after acquisition.

use std::path::MAIN_SEPARATOR;

use crate::error::Result;
use crate::expand;

/// Path services supplied by the embedding host.
///
/// Implementations must be safe to call from independent concurrent
/// invocations; the resolver never synchronizes around them.
pub trait HostServices: Send + Sync {
    /// Expand a path string against the current directory and user-home
    /// conventions, without consulting the filesystem.
    ///
    /// # Errors
    ///
    /// Returns the host's own expansion failure, which the resolver
    /// propagates untouched.
    fn expand(&self, name: &str) -> Result<String>;

    /// Whether `name` denotes a directory per the host's trailing-separator
    /// convention.
    fn is_directory_name(&self, name: &str) -> bool;

    /// Turn `name` into a directory name, appending the separator if it is
    /// not one already.
    fn as_directory_name(&self, name: &str) -> String;
}

/// Host services backed by the running process.
///
/// Expansion uses the current working directory and the `~` convention of
/// [`crate::expand`]; the directory-name convention is a trailing
/// [`MAIN_SEPARATOR`].
///
/// # Examples
///
/// ```
/// use truename::{HostServices, NativeHost};
///
/// let host = NativeHost::new();
/// assert!(host.is_directory_name("/tmp/"));
/// assert_eq!(host.as_directory_name("/tmp"), "/tmp/");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl NativeHost {
    /// Create the native host services.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HostServices for NativeHost {
    fn expand(&self, name: &str) -> Result<String> {
        expand::expand(name)
    }

    fn is_directory_name(&self, name: &str) -> bool {
        expand::has_trailing_separator(name)
    }

    fn as_directory_name(&self, name: &str) -> String {
        if expand::has_trailing_separator(name) {
            name.to_string()
        } else {
            format!("{name}{MAIN_SEPARATOR}")
        }
    }
}
