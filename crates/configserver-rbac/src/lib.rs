//! # Configuration Server RBAC
//!
//! This crate defines the internal access vocabulary of the configuration server.
//!
//! ## Overview
//!
//! The configserver-rbac crate handles:
//! - **Permissions**: Read, Write, Commit and Admin capabilities
//! - **Permission Sets**: The fixed, ordered permission list of each tier
//! - **Role Tiers**: The totally ordered hierarchy Admin > Commit > Write > Read
//!
//! ## Architecture
//!
//! ```text
//! RoleTier ──→ PermissionSet ──→ [Permission, ...] ──→ "ROLE_CONFIG_*" authorities
//!
//!   Read   → [read]
//!   Write  → [read, write]
//!   Commit → [read, write, commit]
//!   Admin  → [read, write, commit, admin]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use configserver_rbac::{Permission, PermissionSet, RoleTier};
//!
//! let set = RoleTier::Commit.permissions();
//! assert!(set.contains(Permission::Write));
//! assert!(!set.contains(Permission::Admin));
//!
//! // The empty set means "authenticated, but unauthorized"
//! assert!(PermissionSet::EMPTY.is_empty());
//! ```
//!
//! ## Integration with configserver-ldap
//!
//! `configserver-ldap` resolves directory group memberships into one
//! [`RoleTier`] and hands its [`PermissionSet`] to the host.

pub mod permissions;
pub mod roles;

// Re-export main types for convenience
pub use permissions::{Permission, PermissionSet, AUTHORITY_PREFIX};
pub use roles::RoleTier;
