//! # Permissions
//!
//! The internal permissions of the configuration server and the fixed,
//! ordered permission sets handed out per role tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix the host security layer puts in front of every authority string.
pub const AUTHORITY_PREFIX: &str = "ROLE_";

/// A single capability inside the configuration server.
///
/// - **Read**: browse configuration files and agent mappings
/// - **Write**: edit configuration files and agent mappings
/// - **Commit**: promote changes into the live branch
/// - **Admin**: manage users and server settings
///
/// # Example
///
/// ```
/// use configserver_rbac::permissions::Permission;
///
/// assert_eq!(Permission::Commit.as_str(), "commit");
/// assert_eq!(Permission::Commit.authority(), "ROLE_CONFIG_COMMIT");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Read access to configuration.
    Read,

    /// Modify configuration in the working area.
    Write,

    /// Promote configuration changes.
    Commit,

    /// Administrative access.
    Admin,
}

impl Permission {
    /// Get the short name of the permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Commit => "commit",
            Permission::Admin => "admin",
        }
    }

    /// Get the authority string attached to a principal's security context.
    ///
    /// # Returns
    ///
    /// The permission name prefixed with [`AUTHORITY_PREFIX`].
    pub fn authority(&self) -> &'static str {
        match self {
            Permission::Read => "ROLE_CONFIG_READ",
            Permission::Write => "ROLE_CONFIG_WRITE",
            Permission::Commit => "ROLE_CONFIG_COMMIT",
            Permission::Admin => "ROLE_CONFIG_ADMIN",
        }
    }

    /// Parse a permission from its short name or its authority string.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Permission)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use configserver_rbac::permissions::Permission;
    ///
    /// assert_eq!(Permission::parse("write"), Some(Permission::Write));
    /// assert_eq!(Permission::parse("ROLE_CONFIG_ADMIN"), Some(Permission::Admin));
    /// assert_eq!(Permission::parse("config_read"), Some(Permission::Read));
    /// assert_eq!(Permission::parse("delete"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let name = lower
            .strip_prefix("role_")
            .unwrap_or(&lower)
            .trim_start_matches("config_");
        match name {
            "read" => Some(Permission::Read),
            "write" => Some(Permission::Write),
            "commit" => Some(Permission::Commit),
            "admin" => Some(Permission::Admin),
            _ => None,
        }
    }

    /// Get all permissions, lowest first.
    pub fn all() -> Vec<Self> {
        vec![
            Permission::Read,
            Permission::Write,
            Permission::Commit,
            Permission::Admin,
        ]
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const NO_PERMISSIONS: &[Permission] = &[];
const READ_PERMISSIONS: &[Permission] = &[Permission::Read];
const WRITE_PERMISSIONS: &[Permission] = &[Permission::Read, Permission::Write];
const COMMIT_PERMISSIONS: &[Permission] = &[Permission::Read, Permission::Write, Permission::Commit];
const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::Read,
    Permission::Write,
    Permission::Commit,
    Permission::Admin,
];

/// An immutable, ordered set of permissions.
///
/// Every non-empty set is one of the fixed tier constants. Sets are never built
/// by merging, so a principal always carries exactly one tier's list.
///
/// # Example
///
/// ```
/// use configserver_rbac::permissions::{Permission, PermissionSet};
///
/// let set = PermissionSet::WRITE;
/// assert!(set.contains(Permission::Read));
/// assert!(set.contains(Permission::Write));
/// assert!(!set.contains(Permission::Commit));
/// assert_eq!(set.authorities(), vec!["ROLE_CONFIG_READ", "ROLE_CONFIG_WRITE"]);
/// ```
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: &'static [Permission],
}

impl PermissionSet {
    /// The set granted when no tier matches.
    pub const EMPTY: PermissionSet = PermissionSet {
        permissions: NO_PERMISSIONS,
    };

    /// Permissions of the read tier.
    pub const READ: PermissionSet = PermissionSet {
        permissions: READ_PERMISSIONS,
    };

    /// Permissions of the write tier.
    pub const WRITE: PermissionSet = PermissionSet {
        permissions: WRITE_PERMISSIONS,
    };

    /// Permissions of the commit tier.
    pub const COMMIT: PermissionSet = PermissionSet {
        permissions: COMMIT_PERMISSIONS,
    };

    /// Permissions of the admin tier.
    pub const ADMIN: PermissionSet = PermissionSet {
        permissions: ADMIN_PERMISSIONS,
    };

    /// Get the empty permission set.
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Check if the set contains a permission.
    pub fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Check if this set contains every permission of another set.
    pub fn contains_all(&self, other: &PermissionSet) -> bool {
        other.iter().all(|perm| self.contains(perm))
    }

    /// Iterate over the permissions in order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'static, Permission>> {
        self.permissions.iter().copied()
    }

    /// Get the permissions as a slice.
    pub fn as_slice(&self) -> &'static [Permission] {
        self.permissions
    }

    /// Get the authority strings for the host security context, in order.
    pub fn authorities(&self) -> Vec<&'static str> {
        self.iter().map(|perm| perm.authority()).collect()
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl IntoIterator for PermissionSet {
    type Item = Permission;
    type IntoIter = std::iter::Copied<std::slice::Iter<'static, Permission>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = Permission;
    type IntoIter = std::iter::Copied<std::slice::Iter<'static, Permission>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_parsing() {
        assert_eq!(Permission::parse("read"), Some(Permission::Read));
        assert_eq!(Permission::parse("READ"), Some(Permission::Read));
        assert_eq!(Permission::parse("ROLE_CONFIG_WRITE"), Some(Permission::Write));
        assert_eq!(Permission::parse("role_config_commit"), Some(Permission::Commit));
        assert_eq!(Permission::parse("admin"), Some(Permission::Admin));

        assert_eq!(Permission::parse(""), None);
        assert_eq!(Permission::parse("ROLE_"), None);
        assert_eq!(Permission::parse("manage"), None);
    }

    #[test]
    fn test_authorities_carry_prefix() {
        for perm in Permission::all() {
            assert!(perm.authority().starts_with(AUTHORITY_PREFIX));
            assert_eq!(Permission::parse(perm.authority()), Some(perm));
        }
    }

    #[test]
    fn test_tier_sets_are_fixed() {
        assert_eq!(PermissionSet::READ.as_slice(), &[Permission::Read]);
        assert_eq!(
            PermissionSet::WRITE.as_slice(),
            &[Permission::Read, Permission::Write]
        );
        assert_eq!(
            PermissionSet::COMMIT.as_slice(),
            &[Permission::Read, Permission::Write, Permission::Commit]
        );
        assert_eq!(PermissionSet::ADMIN.as_slice(), Permission::all().as_slice());
    }

    #[test]
    fn test_sets_are_nested() {
        assert!(PermissionSet::ADMIN.contains_all(&PermissionSet::COMMIT));
        assert!(PermissionSet::COMMIT.contains_all(&PermissionSet::WRITE));
        assert!(PermissionSet::WRITE.contains_all(&PermissionSet::READ));
        assert!(!PermissionSet::READ.contains_all(&PermissionSet::WRITE));
        assert!(PermissionSet::READ.contains_all(&PermissionSet::EMPTY));
    }

    #[test]
    fn test_empty_set() {
        let set = PermissionSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.authorities().is_empty());
        assert_eq!(set, PermissionSet::empty());
    }

    #[test]
    fn test_permission_set_serializes_as_list() {
        let json = serde_json::to_string(&PermissionSet::COMMIT).unwrap();
        assert_eq!(json, r#"["read","write","commit"]"#);

        let json = serde_json::to_string(&PermissionSet::EMPTY).unwrap();
        assert_eq!(json, "[]");
    }
}
