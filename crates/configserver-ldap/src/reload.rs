//! Live-reloadable resolver
//!
//! [`SharedResolver`] keeps the current [`RoleResolver`] behind an atomic
//! pointer. Readers load a snapshot without locking; a reload compiles the
//! new bindings first and then swaps the whole snapshot in one store.

use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use configserver_rbac::PermissionSet;

use crate::config::RoleConfiguration;
use crate::error::ConfigResult;
use crate::membership::GroupMembership;
use crate::resolver::RoleResolver;

/// Role resolver whose bindings can be replaced while it is in use.
///
/// # Examples
///
/// ```
/// use configserver_ldap::{RoleConfiguration, SharedResolver};
/// use configserver_rbac::PermissionSet;
///
/// let shared = SharedResolver::new(RoleConfiguration::new().with_read_groups(["ops"]));
/// assert_eq!(shared.resolve_authorities(["ROLE_ops"]), PermissionSet::READ);
///
/// shared.reload(RoleConfiguration::new().with_commit_groups(["ops"]));
/// assert_eq!(shared.resolve_authorities(["ROLE_ops"]), PermissionSet::COMMIT);
/// ```
#[derive(Debug)]
pub struct SharedResolver {
    current: ArcSwap<RoleResolver>,
}

impl SharedResolver {
    /// Create a shared resolver from an initial configuration.
    pub fn new(config: RoleConfiguration) -> Self {
        Self::from(RoleResolver::new(config))
    }

    /// Create a shared resolver from a server configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Ok(Self::new(RoleConfiguration::from_path(path)?))
    }

    /// Get the current snapshot.
    ///
    /// The snapshot stays valid and unchanged across later reloads.
    pub fn snapshot(&self) -> Arc<RoleResolver> {
        self.current.load_full()
    }

    /// Resolve a membership against the current snapshot.
    pub fn resolve(&self, membership: &GroupMembership) -> PermissionSet {
        self.current.load().resolve(membership)
    }

    /// Resolve raw authority strings against the current snapshot.
    pub fn resolve_authorities<I, S>(&self, authorities: I) -> PermissionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.current.load().resolve_authorities(authorities)
    }

    /// Replace the bindings.
    pub fn reload(&self, config: RoleConfiguration) {
        let next = Arc::new(RoleResolver::new(config));
        self.current.store(next);
        info!("Reloaded LDAP role bindings");
    }

    /// Replace the bindings from a server configuration file.
    ///
    /// On failure the current snapshot stays in place.
    pub fn reload_from_path(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        match RoleConfiguration::from_path(path) {
            Ok(config) => {
                self.reload(config);
                Ok(())
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to reload LDAP role bindings, keeping previous bindings"
                );
                Err(e)
            }
        }
    }
}

impl From<RoleResolver> for SharedResolver {
    fn from(resolver: RoleResolver) -> Self {
        Self {
            current: ArcSwap::from_pointee(resolver),
        }
    }
}
