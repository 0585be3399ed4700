//! Settings model for the LDAP section of the server configuration
//!
//! Mirrors the `security.ldap` part of the host's YAML configuration. Every
//! section is optional; anything missing or `null` falls back to empty.

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use configserver_rbac::RoleTier;

use crate::error::{ConfigError, ConfigResult};

/// Top-level server configuration, reduced to what role resolution reads.
///
/// Unknown keys are ignored so the full host configuration file can be
/// passed in unchanged.
///
/// # Examples
///
/// ```
/// use configserver_ldap::settings::ServerSettings;
///
/// let yaml = r#"
/// security:
///   ldap:
///     roles:
///       admin: [ops-admins]
/// "#;
/// let settings = ServerSettings::from_yaml_str(yaml).unwrap();
/// assert_eq!(settings.security.ldap.roles.admin, vec!["ops-admins".to_string()]);
/// assert!(settings.security.ldap.admin_group.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Security settings
    #[serde(default, deserialize_with = "null_as_default")]
    pub security: SecuritySettings,
}

/// Security settings of the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Directory authentication settings
    #[serde(default, deserialize_with = "null_as_default")]
    pub ldap: LdapSettings,
}

/// Directory authentication settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LdapSettings {
    /// Single group granted admin access.
    ///
    /// Deprecated in favour of `roles.admin`, still honoured for older
    /// configuration files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_group: Option<String>,

    /// Directory groups bound to each role tier
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: LdapRoleSettings,
}

/// Directory group names per role tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LdapRoleSettings {
    /// Groups granted read access
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: Vec<String>,

    /// Groups granted write access
    #[serde(default, deserialize_with = "null_as_default")]
    pub write: Vec<String>,

    /// Groups granted commit access
    #[serde(default, deserialize_with = "null_as_default")]
    pub commit: Vec<String>,

    /// Groups granted admin access
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin: Vec<String>,
}

impl LdapRoleSettings {
    /// Get the configured groups of a tier.
    pub fn groups(&self, tier: RoleTier) -> &[String] {
        match tier {
            RoleTier::Read => &self.read,
            RoleTier::Write => &self.write,
            RoleTier::Commit => &self.commit,
            RoleTier::Admin => &self.admin,
        }
    }
}

impl ServerSettings {
    /// Parse settings from a YAML document.
    ///
    /// An empty document yields the default (empty) settings.
    pub fn from_yaml_str(contents: &str) -> ConfigResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Read and parse settings from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded server configuration");
        Self::from_yaml_str(&contents)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
