//! # Configuration Server LDAP Role Mapping
//!
//! This crate maps the directory groups of an LDAP-authenticated principal onto
//! the configuration server's role tiers.
//!
//! ## Overview
//!
//! The configserver-ldap crate handles:
//! - **Settings**: The `security.ldap` section of the server configuration
//! - **Role Configuration**: Immutable group-to-tier bindings
//! - **Membership**: Normalized external group identifiers of one principal
//! - **Resolution**: Highest matching tier wins, its permission set is returned
//! - **Reload**: Atomic replacement of the bindings while serving requests
//!
//! ## Architecture
//!
//! ```text
//! host authorities ("ROLE_ops-admins", ...)
//!   └─ GroupMembership (prefix stripped, lower-cased)
//!        └─ RoleResolver ← RoleConfiguration ← security.ldap (YAML)
//!             │   Admin (roles.admin + deprecated admin-group)
//!             │   Commit
//!             │   Write
//!             │   Read
//!             └─ PermissionSet of the first matching tier, or empty
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use configserver_ldap::{AuthorityMapper, RoleConfiguration, SharedResolver};
//! use configserver_rbac::PermissionSet;
//!
//! let config = RoleConfiguration::new()
//!     .with_admin_groups(["ops-admins"])
//!     .with_write_groups(["ops-writers"])
//!     .with_read_groups(["ops-readers"]);
//! let mapper = SharedResolver::new(config);
//!
//! assert_eq!(mapper.map_authorities(&["ROLE_OPS-ADMINS"]), PermissionSet::ADMIN);
//! assert_eq!(mapper.map_authorities(&["ROLE_ops-writers"]), PermissionSet::WRITE);
//! assert!(mapper.map_authorities(&["ROLE_unknown"]).is_empty());
//! ```
//!
//! ## Logging
//!
//! Resolution outcomes are emitted through `tracing` at debug level, per-tier
//! checks at trace level. The crate never installs a subscriber.

pub mod config;
pub mod error;
pub mod mapper;
pub mod membership;
pub mod reload;
pub mod resolver;
pub mod settings;

// Re-export main types for convenience
pub use config::RoleConfiguration;
pub use error::{ConfigError, ConfigResult};
pub use mapper::AuthorityMapper;
pub use membership::{normalize_authority, GroupMembership};
pub use reload::SharedResolver;
pub use resolver::{resolve, RoleResolver};
pub use settings::{LdapRoleSettings, LdapSettings, SecuritySettings, ServerSettings};
