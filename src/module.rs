//! Registration of the resolver with the host's module registry.
//!
//! The host loads the module once, binds the resolver under its public
//! callable name, and marks the feature available. The installed callable
//! owns its host-service handle for the life of the registry.

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::host::NativeHost;
use crate::truename::Truename;

/// Public name the resolver is registered under.
pub const RESOLVE_TRUENAME: &str = "resolve-truename";

/// Feature name declared available once installation completes.
pub const FEATURE: &str = "truename";

/// A registered callable: one path string in, one path string out.
pub type PathFn = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Host-side registry of named callables and provided features.
///
/// # Examples
///
/// ```no_run
/// use truename::module::{self, Registry};
///
/// let mut registry = Registry::new();
/// module::install(&mut registry);
///
/// assert!(registry.is_provided(module::FEATURE));
/// let real = registry.call(module::RESOLVE_TRUENAME, "/tmp").unwrap()?;
/// # Ok::<(), truename::Error>(())
/// ```
#[derive(Default)]
pub struct Registry {
    callables: HashMap<String, PathFn>,
    provided: HashSet<String>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callable` under `name`, replacing any previous binding.
    pub fn register(&mut self, name: &str, callable: PathFn) {
        self.callables.insert(name.to_string(), callable);
    }

    /// Declare `feature` available.
    pub fn provide(&mut self, feature: &str) {
        self.provided.insert(feature.to_string());
    }

    /// Whether `feature` has been declared available.
    #[must_use]
    pub fn is_provided(&self, feature: &str) -> bool {
        self.provided.contains(feature)
    }

    /// Look up a callable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathFn> {
        self.callables.get(name)
    }

    /// Invoke the callable registered under `name`, or `None` if there is
    /// no such binding.
    pub fn call(&self, name: &str, arg: &str) -> Option<Result<String>> {
        self.get(name).map(|callable| callable(arg))
    }
}

/// Install the truename resolver into `registry`.
///
/// Constructs a resolver over the native host services, registers it under
/// [`RESOLVE_TRUENAME`], and provides [`FEATURE`]. The services are
/// acquired here, once, and live as long as the registry.
pub fn install(registry: &mut Registry) {
    let resolver = Truename::new(NativeHost::new());
    registry.register(
        RESOLVE_TRUENAME,
        Box::new(move |name| resolver.resolve(name)),
    );
    registry.provide(FEATURE);
    log::debug!("installed {RESOLVE_TRUENAME}, provided {FEATURE}");
}
