#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # truename
//!
//! Canonical path resolution ("truename") for an embedding scripting host.
//!
//! The crate bridges a host's path strings and the operating system's
//! canonicalization primitive: an input path is expanded against the
//! current directory and user-home conventions, resolved by the OS
//! (`realpath` semantics), and returned as a host string. A target that
//! does not exist is not an error; its truename is its expanded name.
//!
//! ## Core Types
//!
//! - [`Truename`] and [`resolve_truename`]: the resolver and its one-shot
//!   wrapper
//! - [`HostServices`] and [`NativeHost`]: the host seam and its native
//!   default
//! - [`Registry`] and [`install`]: the host-side registration surface
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```no_run
//! use truename::resolve_truename;
//!
//! // Given the symlink /tmp/a -> /tmp/b, the truename of the link is its
//! // target.
//! assert_eq!(resolve_truename("/tmp/a")?, "/tmp/b");
//!
//! // A missing file resolves to its expanded name, not an error.
//! assert_eq!(
//!     resolve_truename("/tmp/does-not-exist-xyz")?,
//!     "/tmp/does-not-exist-xyz",
//! );
//! # Ok::<(), truename::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod expand;
pub mod host;
pub mod module;
pub mod truename;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use host::{HostServices, NativeHost};
pub use module::{install, Registry};
pub use truename::{resolve_truename, Truename};
