use std::collections::{BTreeMap, BTreeSet, HashMap};

use karobar_core_types::{PlanTier, Role};
use serde::{Deserialize, Serialize};

/// Everything a plan tier grants: its feature set and its usage limits.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlanSpec {
    /// Feature keys unlocked at this tier.
    pub features: BTreeSet<String>,

    /// Usage caps by limit key. `None` means uncapped.
    pub limits: BTreeMap<String, Option<u32>>,
}

/// A sidebar/navigation entry and what gates it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavItem {
    /// Permission a role needs for the item to be visible at all.
    pub permission: String,

    /// Feature key the item is gated behind, if any. A visible item whose
    /// feature the current plan lacks renders locked with an upgrade prompt.
    pub feature: Option<String>,
}

/// The full access catalog: role permissions, plan specs, feature gating.
///
/// Built once at process start (defaults plus optional file/env overrides)
/// and shared immutably; evaluation never mutates it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccessCatalog {
    /// Permission keys granted to each role.
    pub roles: HashMap<Role, BTreeSet<String>>,

    /// Feature and limit tables per plan tier.
    pub plans: BTreeMap<PlanTier, PlanSpec>,

    /// Lowest tier that unlocks each feature; drives upgrade messaging.
    pub feature_min_plan: BTreeMap<String, PlanTier>,

    /// Navigation entries by nav key.
    pub nav: BTreeMap<String, NavItem>,
}

/// Access verdict for one navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavAccess {
    /// Role holds the item's permission.
    pub visible: bool,

    /// Visible but gated behind a plan tier the business does not have.
    pub locked: bool,

    /// Minimum tier that would unlock the item, when locked.
    pub required_plan: Option<PlanTier>,
}

impl NavAccess {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            locked: false,
            required_plan: None,
        }
    }
}
