//! Role tiers
//!
//! The four fixed privilege levels of the configuration server, each bound to
//! the permission set it grants.

use serde::{Deserialize, Serialize};

use crate::permissions::PermissionSet;

/// Privilege tier a principal is resolved into.
///
/// Tiers are totally ordered. The hierarchy is: Read < Write < Commit < Admin
///
/// # Permission Model
///
/// - **Read**: read-only access to configuration
/// - **Write**: can edit configuration in the working area
/// - **Commit**: can additionally promote changes
/// - **Admin**: full control including user management
///
/// # Examples
///
/// ```
/// use configserver_rbac::{Permission, RoleTier};
///
/// let tier = RoleTier::Write;
/// assert!(tier.can_write());
/// assert!(!tier.can_commit());
/// assert!(tier.permissions().contains(Permission::Read));
///
/// assert!(RoleTier::Admin > RoleTier::Commit);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    /// Read-only access
    Read = 1,

    /// Can edit configuration
    Write = 2,

    /// Can promote configuration
    Commit = 3,

    /// Full administrative access
    Admin = 4,
}

impl RoleTier {
    /// Get the permission set granted to this tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use configserver_rbac::{PermissionSet, RoleTier};
    ///
    /// assert_eq!(RoleTier::Commit.permissions(), PermissionSet::COMMIT);
    /// ```
    pub fn permissions(&self) -> PermissionSet {
        match self {
            Self::Read => PermissionSet::READ,
            Self::Write => PermissionSet::WRITE,
            Self::Commit => PermissionSet::COMMIT,
            Self::Admin => PermissionSet::ADMIN,
        }
    }

    /// Get all tiers in resolution order, highest privilege first.
    pub fn by_priority() -> [Self; 4] {
        [Self::Admin, Self::Commit, Self::Write, Self::Read]
    }

    /// Check if this tier can edit configuration.
    ///
    /// # Returns
    ///
    /// `true` for Write, Commit, and Admin
    pub fn can_write(&self) -> bool {
        *self >= RoleTier::Write
    }

    /// Check if this tier can promote configuration.
    ///
    /// # Returns
    ///
    /// `true` for Commit and Admin
    pub fn can_commit(&self) -> bool {
        *self >= RoleTier::Commit
    }

    /// Check if this tier has admin privileges.
    pub fn is_admin(&self) -> bool {
        *self >= RoleTier::Admin
    }

    /// Parse tier from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(RoleTier)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use configserver_rbac::RoleTier;
    ///
    /// assert_eq!(RoleTier::parse("commit"), Some(RoleTier::Commit));
    /// assert_eq!(RoleTier::parse("ADMIN"), Some(RoleTier::Admin));
    /// assert_eq!(RoleTier::parse("owner"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            "commit" => Some(Self::Commit),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get string representation of the tier.
    ///
    /// # Returns
    ///
    /// Lowercase string representation, which is also the configuration key
    /// of the tier's group list.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Commit => "commit",
            Self::Admin => "admin",
        }
    }

    /// Get a human-readable display name for the tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Commit => "Commit",
            Self::Admin => "Admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::Permission;

    #[test]
    fn test_role_tier_hierarchy() {
        assert!(RoleTier::Admin > RoleTier::Commit);
        assert!(RoleTier::Commit > RoleTier::Write);
        assert!(RoleTier::Write > RoleTier::Read);
    }

    #[test]
    fn test_by_priority_is_descending() {
        let tiers = RoleTier::by_priority();
        assert_eq!(tiers[0], RoleTier::Admin);
        assert!(tiers.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_role_tier_capabilities() {
        assert!(!RoleTier::Read.can_write());
        assert!(RoleTier::Write.can_write());
        assert!(!RoleTier::Write.can_commit());
        assert!(RoleTier::Commit.can_commit());
        assert!(!RoleTier::Commit.is_admin());
        assert!(RoleTier::Admin.is_admin());
    }

    #[test]
    fn test_permissions_follow_hierarchy() {
        assert!(RoleTier::Admin.permissions().contains(Permission::Admin));
        assert!(!RoleTier::Commit.permissions().contains(Permission::Admin));
        assert!(RoleTier::Commit.permissions().contains(Permission::Commit));
        assert!(!RoleTier::Write.permissions().contains(Permission::Commit));
        assert_eq!(RoleTier::Read.permissions().len(), 1);
    }

    #[test]
    fn test_role_tier_parse() {
        assert_eq!(RoleTier::parse("read"), Some(RoleTier::Read));
        assert_eq!(RoleTier::parse("Write"), Some(RoleTier::Write));
        assert_eq!(RoleTier::parse("invalid"), None);
        for tier in RoleTier::by_priority() {
            assert_eq!(RoleTier::parse(tier.as_str()), Some(tier));
        }
    }
}
