//! Role bindings
//!
//! [`RoleConfiguration`] is the immutable snapshot of which directory groups
//! map onto which role tier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

use configserver_rbac::RoleTier;

use crate::error::ConfigResult;
use crate::settings::{LdapSettings, ServerSettings};

/// Directory groups bound to each role tier.
///
/// Built once from the host configuration and shared read-only. Group names
/// are kept as configured; case folding happens when a resolver is built.
///
/// # Examples
///
/// ```
/// use configserver_ldap::RoleConfiguration;
/// use configserver_rbac::RoleTier;
///
/// let config = RoleConfiguration::new()
///     .with_admin_groups(["ops-admins"])
///     .with_write_groups(["ops-writers"])
///     .with_read_groups(["ops-readers"]);
///
/// assert!(config.groups(RoleTier::Admin).contains("ops-admins"));
/// assert!(config.groups(RoleTier::Commit).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfiguration {
    /// Groups resolved into the admin tier
    #[serde(default)]
    pub admin_groups: BTreeSet<String>,

    /// Groups resolved into the commit tier
    #[serde(default)]
    pub commit_groups: BTreeSet<String>,

    /// Groups resolved into the write tier
    #[serde(default)]
    pub write_groups: BTreeSet<String>,

    /// Groups resolved into the read tier
    #[serde(default)]
    pub read_groups: BTreeSet<String>,

    /// Deprecated single admin group, kept for older configuration files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_admin_group: Option<String>,
}

impl RoleConfiguration {
    /// Create a configuration that binds no groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the admin groups.
    pub fn with_admin_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin_groups = collect_groups(groups);
        self
    }

    /// Set the commit groups.
    pub fn with_commit_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commit_groups = collect_groups(groups);
        self
    }

    /// Set the write groups.
    pub fn with_write_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.write_groups = collect_groups(groups);
        self
    }

    /// Set the read groups.
    pub fn with_read_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read_groups = collect_groups(groups);
        self
    }

    /// Set the deprecated single admin group.
    pub fn with_legacy_admin_group(mut self, group: impl Into<String>) -> Self {
        self.legacy_admin_group = Some(group.into());
        self
    }

    /// Get the groups bound to a tier.
    ///
    /// The legacy admin group is not part of the admin set.
    pub fn groups(&self, tier: RoleTier) -> &BTreeSet<String> {
        match tier {
            RoleTier::Admin => &self.admin_groups,
            RoleTier::Commit => &self.commit_groups,
            RoleTier::Write => &self.write_groups,
            RoleTier::Read => &self.read_groups,
        }
    }

    /// Check if no group is bound to any tier.
    pub fn is_empty(&self) -> bool {
        RoleTier::by_priority()
            .iter()
            .all(|tier| self.groups(*tier).is_empty())
            && self.legacy_admin_group.is_none()
    }

    /// Build the bindings from a server configuration document.
    ///
    /// # Examples
    ///
    /// ```
    /// use configserver_ldap::RoleConfiguration;
    ///
    /// let yaml = r#"
    /// security:
    ///   ldap:
    ///     admin-group: legacy-admins
    ///     roles:
    ///       read: [ops-readers]
    /// "#;
    /// let config = RoleConfiguration::from_yaml_str(yaml).unwrap();
    /// assert!(config.read_groups.contains("ops-readers"));
    /// assert_eq!(config.legacy_admin_group.as_deref(), Some("legacy-admins"));
    /// ```
    pub fn from_yaml_str(contents: &str) -> ConfigResult<Self> {
        let settings = ServerSettings::from_yaml_str(contents)?;
        Ok(Self::from(&settings.security.ldap))
    }

    /// Build the bindings from a server configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let settings = ServerSettings::from_path(path)?;
        Ok(Self::from(&settings.security.ldap))
    }
}

impl From<&LdapSettings> for RoleConfiguration {
    fn from(settings: &LdapSettings) -> Self {
        if let Some(group) = &settings.admin_group {
            warn!(
                group = %group,
                "security.ldap.admin-group is deprecated, use security.ldap.roles.admin instead"
            );
        }
        let roles = &settings.roles;
        Self {
            admin_groups: collect_groups(roles.admin.iter().cloned()),
            commit_groups: collect_groups(roles.commit.iter().cloned()),
            write_groups: collect_groups(roles.write.iter().cloned()),
            read_groups: collect_groups(roles.read.iter().cloned()),
            legacy_admin_group: settings.admin_group.clone(),
        }
    }
}

fn collect_groups<I, S>(groups: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    groups.into_iter().map(Into::into).collect()
}
