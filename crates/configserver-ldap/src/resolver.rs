//! Resolution of directory groups into a role tier.

use std::collections::HashSet;
use tracing::{debug, trace};

use configserver_rbac::{PermissionSet, RoleTier};

use crate::config::RoleConfiguration;
use crate::membership::GroupMembership;

/// Maps group memberships onto the highest matching role tier.
///
/// Built from one [`RoleConfiguration`] snapshot; the configured names are
/// lower-cased once here rather than on every call. Tiers are tested from
/// Admin down to Read and the first match wins, so permission sets are never
/// combined across tiers.
///
/// # Examples
///
/// ```
/// use configserver_ldap::{GroupMembership, RoleConfiguration, RoleResolver};
/// use configserver_rbac::{PermissionSet, RoleTier};
///
/// let resolver = RoleResolver::new(
///     RoleConfiguration::new()
///         .with_admin_groups(["ops-admins"])
///         .with_write_groups(["ops-writers"])
///         .with_read_groups(["ops-readers"]),
/// );
///
/// let membership = GroupMembership::from_authorities(["ROLE_ops-writers"]);
/// assert_eq!(resolver.resolve_tier(&membership), Some(RoleTier::Write));
/// assert_eq!(resolver.resolve(&membership), PermissionSet::WRITE);
///
/// let membership = GroupMembership::from_authorities(["ROLE_unknown"]);
/// assert!(resolver.resolve(&membership).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RoleResolver {
    config: RoleConfiguration,
    /// Lower-cased group names per tier, highest priority first.
    tiers: Vec<(RoleTier, HashSet<String>)>,
    legacy_admin_group: Option<String>,
}

impl RoleResolver {
    /// Compile a resolver from a configuration snapshot.
    pub fn new(config: RoleConfiguration) -> Self {
        let tiers = RoleTier::by_priority()
            .into_iter()
            .map(|tier| (tier, fold_names(config.groups(tier))))
            .collect();
        let legacy_admin_group = config
            .legacy_admin_group
            .as_deref()
            .filter(|group| !group.trim().is_empty())
            .map(str::to_lowercase);

        Self {
            config,
            tiers,
            legacy_admin_group,
        }
    }

    /// Get the configuration this resolver was built from.
    pub fn config(&self) -> &RoleConfiguration {
        &self.config
    }

    /// Find the highest tier the membership matches.
    ///
    /// # Returns
    ///
    /// `None` if no configured group matches.
    pub fn resolve_tier(&self, membership: &GroupMembership) -> Option<RoleTier> {
        if membership.is_empty() {
            return None;
        }

        for (tier, names) in &self.tiers {
            let matched = membership.intersects(names)
                || (*tier == RoleTier::Admin && self.matches_legacy_admin(membership));
            trace!(tier = tier.as_str(), matched, "Checked role tier");
            if matched {
                return Some(*tier);
            }
        }

        None
    }

    /// Resolve a membership into the permission set of its highest tier.
    ///
    /// # Returns
    ///
    /// The tier's permission set, or the empty set if nothing matches.
    pub fn resolve(&self, membership: &GroupMembership) -> PermissionSet {
        match self.resolve_tier(membership) {
            Some(tier) => {
                debug!(
                    tier = tier.as_str(),
                    groups = membership.len(),
                    "Resolved directory groups"
                );
                tier.permissions()
            }
            None => {
                debug!(
                    groups = membership.len(),
                    "No role tier matches directory groups"
                );
                PermissionSet::EMPTY
            }
        }
    }

    /// Resolve raw authority strings as supplied by the host.
    ///
    /// # Examples
    ///
    /// ```
    /// use configserver_ldap::{RoleConfiguration, RoleResolver};
    /// use configserver_rbac::PermissionSet;
    ///
    /// let resolver = RoleResolver::new(RoleConfiguration::new().with_admin_groups(["ops-admins"]));
    /// assert_eq!(resolver.resolve_authorities(["ROLE_OPS-ADMINS"]), PermissionSet::ADMIN);
    /// ```
    pub fn resolve_authorities<I, S>(&self, authorities: I) -> PermissionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolve(&GroupMembership::from_authorities(authorities))
    }

    fn matches_legacy_admin(&self, membership: &GroupMembership) -> bool {
        match &self.legacy_admin_group {
            Some(group) if membership.contains_normalized(group) => {
                debug!(group = %group, "Matched deprecated legacy admin group");
                true
            }
            _ => false,
        }
    }
}

impl From<RoleConfiguration> for RoleResolver {
    fn from(config: RoleConfiguration) -> Self {
        Self::new(config)
    }
}

/// Resolve a membership against a configuration in one call.
///
/// Compiles the configuration on every call; hosts resolving repeatedly
/// should keep a [`RoleResolver`] instead.
pub fn resolve(membership: &GroupMembership, config: &RoleConfiguration) -> PermissionSet {
    RoleResolver::new(config.clone()).resolve(membership)
}

fn fold_names<'a, I>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .filter(|name| !name.is_empty())
        .map(|name| name.to_lowercase())
        .collect()
}
