//! Shared domain primitives for the Karobar policy core crates.
//!
//! Everything here is deliberately small and copy-cheap: role and plan keys as
//! stored on business/user records, the filer status used by the tax engine,
//! and the shared error type the per-crate errors convert into.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Shared error type for the Karobar policy crates.
///
/// Per-crate errors (`PolicyError`, `AccessError`, `TaxError`) convert into
/// this when a caller wants a single error surface.
#[derive(Debug, Error, Clone)]
pub enum KarobarError {
    #[error("{message}")]
    Message { message: String },
}

impl KarobarError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// User role within one business, ordered by privilege.
///
/// The key strings are exactly what the persistence layer stores on a
/// membership record. Unknown keys resolve to [`Role::Viewer`], the least
/// privileged role, so a corrupted or stale record can never widen access.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Manager,
    Salesperson,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Owner,
        Role::Admin,
        Role::Manager,
        Role::Salesperson,
        Role::Viewer,
    ];

    /// Resolve a stored role key. Unknown keys fall back to `Viewer`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "owner" => Role::Owner,
            "admin" => Role::Admin,
            "manager" => Role::Manager,
            "salesperson" => Role::Salesperson,
            _ => Role::Viewer,
        }
    }

    /// The key string as persisted on membership records.
    pub fn key(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Salesperson => "salesperson",
            Role::Viewer => "viewer",
        }
    }

    /// Privilege rank; higher means more privileged.
    pub fn rank(&self) -> u8 {
        match self {
            Role::Owner => 4,
            Role::Admin => 3,
            Role::Manager => 2,
            Role::Salesperson => 1,
            Role::Viewer => 0,
        }
    }

    /// True iff `self` ranks at or above `min`.
    pub fn at_least(&self, min: Role) -> bool {
        self.rank() >= min.rank()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Subscription tier gating feature availability and usage limits.
///
/// Total order: `basic < standard < premium < enterprise`. Unknown keys
/// resolve to [`PlanTier::Basic`], the most restrictive real tier, never to
/// "no restrictions".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Basic,
    Standard,
    Premium,
    Enterprise,
}

impl PlanTier {
    pub const ALL: [PlanTier; 4] = [
        PlanTier::Basic,
        PlanTier::Standard,
        PlanTier::Premium,
        PlanTier::Enterprise,
    ];

    /// Resolve a stored plan key. Unknown keys fall back to `Basic`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "basic" => PlanTier::Basic,
            "standard" => PlanTier::Standard,
            "premium" => PlanTier::Premium,
            "enterprise" => PlanTier::Enterprise,
            _ => PlanTier::Basic,
        }
    }

    /// The key string as persisted on business records.
    pub fn key(&self) -> &'static str {
        match self {
            PlanTier::Basic => "basic",
            PlanTier::Standard => "standard",
            PlanTier::Premium => "premium",
            PlanTier::Enterprise => "enterprise",
        }
    }

    /// Display name for upgrade messaging.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Basic => "Basic",
            PlanTier::Standard => "Standard",
            PlanTier::Premium => "Premium",
            PlanTier::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// FBR registration status of a business, as stored on its tax configuration.
///
/// Non-filers pay penalty withholding rates under Pakistani tax law.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FilerStatus {
    #[serde(rename = "Filer")]
    Filer,
    #[default]
    #[serde(rename = "Non-Filer")]
    NonFiler,
}

impl FilerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilerStatus::Filer => "Filer",
            FilerStatus::NonFiler => "Non-Filer",
        }
    }
}

impl fmt::Display for FilerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque business identifier.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BusinessId(pub String);

impl BusinessId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BusinessId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_key_resolves_to_viewer() {
        assert_eq!(Role::from_key("superuser"), Role::Viewer);
        assert_eq!(Role::from_key(""), Role::Viewer);
    }

    #[test]
    fn role_ordering_matches_privilege() {
        assert!(Role::Owner.at_least(Role::Admin));
        assert!(Role::Manager.at_least(Role::Manager));
        assert!(!Role::Salesperson.at_least(Role::Manager));
        assert!(!Role::from_key("nonsense").at_least(Role::Salesperson));
    }

    #[test]
    fn unknown_plan_key_resolves_to_basic() {
        assert_eq!(PlanTier::from_key("platinum"), PlanTier::Basic);
    }

    #[test]
    fn plan_tier_order_is_total() {
        assert!(PlanTier::Basic < PlanTier::Standard);
        assert!(PlanTier::Standard < PlanTier::Premium);
        assert!(PlanTier::Premium < PlanTier::Enterprise);
    }

    #[test]
    fn filer_status_serializes_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&FilerStatus::NonFiler).unwrap(),
            "\"Non-Filer\""
        );
        assert_eq!(
            serde_json::to_string(&FilerStatus::Filer).unwrap(),
            "\"Filer\""
        );
    }
}
