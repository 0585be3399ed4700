//! Host-facing mapping strategy
//!
//! The authentication layer holds an [`AuthorityMapper`] and calls it once a
//! principal has been authenticated against the directory.

use std::sync::Arc;

use configserver_rbac::PermissionSet;

use crate::reload::SharedResolver;
use crate::resolver::RoleResolver;

/// Maps a principal's external authorities onto internal permissions.
///
/// An empty result means "authenticated, but unauthorized".
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use configserver_ldap::{AuthorityMapper, RoleConfiguration, RoleResolver};
/// use configserver_rbac::PermissionSet;
///
/// let mapper: Arc<dyn AuthorityMapper> = Arc::new(RoleResolver::new(
///     RoleConfiguration::new().with_read_groups(["ops-readers"]),
/// ));
/// assert_eq!(mapper.map_authorities(&["ROLE_ops-readers"]), PermissionSet::READ);
/// ```
pub trait AuthorityMapper: Send + Sync {
    /// Map external authorities to the granted permission set.
    fn map_authorities(&self, authorities: &[&str]) -> PermissionSet;
}

impl AuthorityMapper for RoleResolver {
    fn map_authorities(&self, authorities: &[&str]) -> PermissionSet {
        self.resolve_authorities(authorities)
    }
}

impl AuthorityMapper for SharedResolver {
    fn map_authorities(&self, authorities: &[&str]) -> PermissionSet {
        self.resolve_authorities(authorities)
    }
}

impl<T: AuthorityMapper + ?Sized> AuthorityMapper for Arc<T> {
    fn map_authorities(&self, authorities: &[&str]) -> PermissionSet {
        (**self).map_authorities(authorities)
    }
}
