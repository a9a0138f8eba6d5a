//! Host-convention path expansion.
//!
//! Expansion turns an arbitrary host path string into an absolute one
//! without consulting the filesystem:
//! - Expanding tilde (~) to the home directory
//! - Joining relative paths (and the empty path) onto the current directory
//! - Dropping `.` segments and collapsing `..` segments textually
//! - Preserving a trailing separator (the directory-name convention)
//!
//! Symbolic links are left alone; following them is the resolver's job,
//! not the expander's.

use std::env;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{Error, Result};

/// Test whether a host string carries a trailing directory separator.
///
/// This is the directory-name convention of the emulated host: a path
/// string ending in the separator denotes a directory rather than the
/// entry itself.
///
/// # Examples
///
/// ```
/// use truename::expand::has_trailing_separator;
///
/// assert!(!has_trailing_separator("file"));
/// assert!(has_trailing_separator(&format!("dir{}", std::path::MAIN_SEPARATOR)));
/// ```
#[must_use]
pub fn has_trailing_separator(name: &str) -> bool {
    name.ends_with(MAIN_SEPARATOR)
}

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user`
/// syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined or is not a valid host string
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use truename::expand::expand_tilde;
///
/// // Expands ~ to the home directory
/// let expanded = expand_tilde("~").unwrap();
/// assert!(std::path::Path::new(&expanded).is_absolute());
///
/// // Leaves everything else unchanged
/// assert_eq!(expand_tilde("/absolute").unwrap(), "/absolute");
/// assert_eq!(expand_tilde("relative").unwrap(), "relative");
/// ```
pub fn expand_tilde(name: &str) -> Result<String> {
    if !name.starts_with('~') {
        return Ok(name.to_string());
    }

    // Get home directory using the home crate
    let home = home::home_dir().ok_or_else(|| Error::Expand {
        name: name.to_string(),
        reason: "cannot determine home directory".to_string(),
    })?;
    let home = home.to_str().ok_or_else(|| Error::Expand {
        name: name.to_string(),
        reason: "home directory is not a valid host string".to_string(),
    })?;
    // A root home would otherwise double the separator on join.
    let home = home.trim_end_matches(MAIN_SEPARATOR);

    if name == "~" {
        Ok(home.to_string())
    } else if name.starts_with("~/") || name.starts_with("~\\") {
        Ok(format!("{home}{}", &name[1..]))
    } else {
        // ~user syntax not supported
        Err(Error::Expand {
            name: name.to_string(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Drop `.` segments and collapse `..` segments textually.
///
/// `..` pops the previous component and saturates: above the root (or an
/// empty relative prefix) it is a no-op, so `/..` collapses to `/`. This
/// matches the emulated host's expansion, which never fails on excess
/// parent references.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use truename::expand::resolve_dot_segments;
///
/// assert_eq!(resolve_dot_segments(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_dot_segments(Path::new("/a/../..")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn resolve_dot_segments(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let _ = result.pop();
            }
            _ => result.push(component),
        }
    }

    result
}

/// Expand a host path string to absolute form.
///
/// This is the native rendition of the host's expand-path service:
/// 1. Expands tilde (~) if present
/// 2. Joins relative paths (and the empty path) onto the current directory
/// 3. Resolves `.` and `..` segments textually
/// 4. Preserves a trailing separator from the input
///
/// The filesystem is never consulted, so the result may name something
/// that does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - Tilde expansion fails
/// - The current directory is unavailable
/// - The expanded path is not representable as a host string
///
/// # Examples
///
/// ```no_run
/// use truename::expand::expand;
///
/// // Relative paths become absolute
/// let expanded = expand("src").unwrap();
/// assert!(std::path::Path::new(&expanded).is_absolute());
///
/// // Dot segments collapse
/// assert_eq!(expand("/a/./b/../c").unwrap(), "/a/c");
///
/// // The directory-name convention survives expansion
/// assert_eq!(expand("/a/b/").unwrap(), "/a/b/");
/// ```
pub fn expand(name: &str) -> Result<String> {
    let tilde = expand_tilde(name)?;
    let wants_directory = has_trailing_separator(&tilde);

    let path = Path::new(&tilde);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|e| Error::Expand {
            name: name.to_string(),
            reason: format!("current directory unavailable: {e}"),
        })?;
        if tilde.is_empty() {
            cwd
        } else {
            cwd.join(path)
        }
    };

    let collapsed = resolve_dot_segments(&absolute);
    let mut expanded = collapsed
        .into_os_string()
        .into_string()
        .map_err(|buf| Error::Expand {
            name: name.to_string(),
            reason: format!("expanded path {buf:?} is not a valid host string"),
        })?;

    if wants_directory && !has_trailing_separator(&expanded) {
        expanded.push(MAIN_SEPARATOR);
    }

    Ok(expanded)
}
