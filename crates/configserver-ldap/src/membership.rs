//! External group membership of one principal.

use std::collections::HashSet;

use configserver_rbac::AUTHORITY_PREFIX;

/// Normalize an external authority into a comparable group name.
///
/// Strips the [`AUTHORITY_PREFIX`] when present and lower-cases the rest.
/// Identifiers without the prefix are only lower-cased.
///
/// # Examples
///
/// ```
/// use configserver_ldap::normalize_authority;
///
/// assert_eq!(normalize_authority("ROLE_Ops-Admins"), "ops-admins");
/// assert_eq!(normalize_authority("Ops-Admins"), "ops-admins");
/// assert_eq!(normalize_authority("ROLE_"), "");
/// ```
pub fn normalize_authority(authority: &str) -> String {
    authority
        .strip_prefix(AUTHORITY_PREFIX)
        .unwrap_or(authority)
        .to_lowercase()
}

/// The directory groups attributed to a principal for one resolution call.
///
/// Stored normalized, so duplicates and case variants collapse.
///
/// # Examples
///
/// ```
/// use configserver_ldap::GroupMembership;
///
/// let membership = GroupMembership::from_authorities(["ROLE_ops-writers", "ROLE_OPS-WRITERS"]);
/// assert_eq!(membership.len(), 1);
/// assert!(membership.contains("Ops-Writers"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMembership {
    groups: HashSet<String>,
}

impl GroupMembership {
    /// Create an empty membership.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a membership from external authority strings.
    pub fn from_authorities<I, S>(authorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        authorities.into_iter().collect()
    }

    /// Add one external authority.
    pub fn insert(&mut self, authority: &str) {
        self.groups.insert(normalize_authority(authority));
    }

    /// Check if the principal is in a group (prefix optional, case-insensitive).
    pub fn contains(&self, group: &str) -> bool {
        self.groups.contains(&normalize_authority(group))
    }

    /// Iterate over the normalized group names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    /// Get the count of distinct groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check if any group is in `names`, which must already be lower-cased.
    pub(crate) fn intersects(&self, names: &HashSet<String>) -> bool {
        if self.groups.len() <= names.len() {
            self.groups.iter().any(|group| names.contains(group))
        } else {
            names.iter().any(|name| self.groups.contains(name))
        }
    }

    /// Check for an exact normalized group name.
    pub(crate) fn contains_normalized(&self, name: &str) -> bool {
        self.groups.contains(name)
    }
}

impl<S: AsRef<str>> FromIterator<S> for GroupMembership {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut membership = GroupMembership::new();
        for authority in iter {
            membership.insert(authority.as_ref());
        }
        membership
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_authority() {
        assert_eq!(normalize_authority("ROLE_ops-admins"), "ops-admins");
        assert_eq!(normalize_authority("ROLE_OPS-ADMINS"), "ops-admins");
        assert_eq!(normalize_authority("ops-admins"), "ops-admins");
        assert_eq!(normalize_authority(""), "");
        assert_eq!(normalize_authority("ROL"), "rol");
    }

    #[test]
    fn test_prefix_is_stripped_once() {
        assert_eq!(normalize_authority("ROLE_ROLE_admins"), "role_admins");
    }

    #[test]
    fn test_lowercase_prefix_is_not_stripped() {
        assert_eq!(normalize_authority("role_admins"), "role_admins");
    }

    #[test]
    fn test_membership_collapses_duplicates() {
        let membership =
            GroupMembership::from_authorities(vec!["ROLE_a", "ROLE_A", "a", "ROLE_b"]);
        assert_eq!(membership.len(), 2);
        assert!(membership.contains("a"));
        assert!(membership.contains("ROLE_B"));
        assert!(!membership.contains("c"));
    }

    #[test]
    fn test_intersects() {
        let membership = GroupMembership::from_authorities(["ROLE_Writers"]);
        let names: HashSet<String> = ["readers", "writers"].iter().map(|s| s.to_string()).collect();
        assert!(membership.intersects(&names));
        assert!(!membership.intersects(&HashSet::new()));
        assert!(!GroupMembership::new().intersects(&names));
    }

    #[test]
    fn test_insert() {
        let mut membership = GroupMembership::new();
        assert!(membership.is_empty());
        membership.insert("ROLE_Auditors");
        assert_eq!(membership.iter().collect::<Vec<_>>(), vec!["auditors"]);
    }
}
