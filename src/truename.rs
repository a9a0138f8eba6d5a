//! Truename resolution.
//!
//! The resolver bridges host path strings and the OS canonical-path
//! primitive: expand the input through the host's services, hand the
//! expanded path to the OS, and map the outcome back into a host value.
//! Absence of the target is not a failure; the truename of a
//! not-yet-existing file is its expanded name.

use std::fs;
use std::io::ErrorKind;

use crate::convert;
use crate::error::{Error, Result};
use crate::host::{HostServices, NativeHost};

/// Resolves host path strings to their canonical ("true") form.
///
/// A resolver holds one handle to the host services it consumes, acquired
/// at construction and never mutated. Each call owns its own buffers, so a
/// single resolver may serve independent concurrent calls.
///
/// # Examples
///
/// ```no_run
/// use truename::Truename;
///
/// let resolver = Truename::native();
///
/// // Symlinks and dot segments are resolved away
/// let real = resolver.resolve("/tmp/../tmp").unwrap();
/// assert!(!real.contains(".."));
///
/// // A missing target is not an error
/// let kept = resolver.resolve("/tmp/does-not-exist-xyz").unwrap();
/// assert_eq!(kept, "/tmp/does-not-exist-xyz");
/// ```
#[derive(Debug, Clone)]
pub struct Truename<H = NativeHost> {
    host: H,
}

impl Truename<NativeHost> {
    /// Create a resolver backed by the native host services.
    #[must_use]
    pub fn native() -> Self {
        Self::new(NativeHost::new())
    }
}

impl Default for Truename<NativeHost> {
    fn default() -> Self {
        Self::native()
    }
}

impl<H: HostServices> Truename<H> {
    /// Create a resolver over the given host services.
    ///
    /// # Examples
    ///
    /// ```
    /// use truename::{NativeHost, Truename};
    ///
    /// let resolver = Truename::new(NativeHost::new());
    /// ```
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Resolve `name` to its true (canonical) path.
    ///
    /// The input is expanded through the host services, then canonicalized
    /// by the OS (`realpath` semantics: all symlinks and dot segments
    /// resolved, every component required to exist). If the expanded input
    /// is a directory name per the host's trailing-separator convention,
    /// the result is returned as a directory name too.
    ///
    /// A target that does not exist is not an error: the expanded name is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::Expand`]: the host's own expansion failure, untouched
    /// - [`Error::Resolve`]: the OS refused to canonicalize for a reason
    ///   other than absence (not-a-directory, permission denied, symlink
    ///   loop, name too long, ...)
    /// - [`Error::Representation`]: the resolved path has no host-string
    ///   representation
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use truename::Truename;
    ///
    /// let resolver = Truename::native();
    /// let real = resolver.resolve("~/project")?;
    /// # Ok::<(), truename::Error>(())
    /// ```
    pub fn resolve(&self, name: &str) -> Result<String> {
        let expanded = self.host.expand(name)?;
        let native = convert::to_native(&expanded);

        match fs::canonicalize(&native) {
            Ok(resolved) => {
                let truename = convert::to_host(resolved)?;
                // Return a directory name when given one.
                if self.host.is_directory_name(&expanded) {
                    Ok(self.host.as_directory_name(&truename))
                } else {
                    Ok(truename)
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                // Truename of a not-yet-existing file is its expanded name.
                log::debug!("{expanded} does not exist, keeping expanded name");
                Ok(expanded)
            }
            Err(err) => Err(Error::Resolve {
                path: native,
                source: err,
            }),
        }
    }
}

/// Resolve `name` with the native host services.
///
/// Convenience wrapper over [`Truename::native`] for one-shot calls.
///
/// # Errors
///
/// See [`Truename::resolve`].
///
/// # Examples
///
/// ```no_run
/// use truename::resolve_truename;
///
/// let real = resolve_truename("/tmp/a")?;
/// # Ok::<(), truename::Error>(())
/// ```
pub fn resolve_truename(name: &str) -> Result<String> {
    Truename::native().resolve(name)
}
