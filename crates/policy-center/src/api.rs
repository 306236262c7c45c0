//! Catalog evaluation. Pure lookups; unknown keys resolve to the most
//! restrictive interpretation rather than erroring.

use chrono::{DateTime, Utc};
use karobar_core_types::{PlanTier, Role};

use crate::errors::PolicyError;
use crate::model::{AccessCatalog, NavAccess};

impl AccessCatalog {
    /// True iff `role` holds `permission`. Unknown role keys evaluate as
    /// `viewer`; unknown permission keys are simply absent from every set.
    pub fn has_permission(&self, role: &str, permission: &str) -> bool {
        self.roles
            .get(&Role::from_key(role))
            .map(|set| set.contains(permission))
            .unwrap_or(false)
    }

    /// True iff `role` ranks at or above `min_role` in the privilege order.
    pub fn is_role_at_least(&self, role: &str, min_role: &str) -> bool {
        Role::from_key(role).at_least(Role::from_key(min_role))
    }

    /// Permission keys granted to `role` (empty for roles absent from the
    /// catalog, which a valid catalog never has).
    pub fn permissions_for_role(&self, role: &str) -> Vec<String> {
        self.roles
            .get(&Role::from_key(role))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// True iff `plan_tier` unlocks `feature`. Unknown tiers behave as basic.
    pub fn plan_has_feature(&self, plan_tier: &str, feature: &str) -> bool {
        self.plans
            .get(&PlanTier::from_key(plan_tier))
            .map(|spec| spec.features.contains(feature))
            .unwrap_or(false)
    }

    /// True iff one more unit of `limit_key` fits under the plan's cap, i.e.
    /// `current_count < limit`. Uncapped limits (and limit keys absent from
    /// the plan) always fit.
    pub fn plan_within_limit(&self, plan_tier: &str, limit_key: &str, current_count: u32) -> bool {
        match self.plan_limit(plan_tier, limit_key) {
            Some(limit) => current_count < limit,
            None => true,
        }
    }

    /// The numeric cap for `limit_key` on `plan_tier`, `None` when uncapped.
    pub fn plan_limit(&self, plan_tier: &str, limit_key: &str) -> Option<u32> {
        self.plans
            .get(&PlanTier::from_key(plan_tier))
            .and_then(|spec| spec.limits.get(limit_key).copied())
            .flatten()
    }

    /// True iff `plan_tier` ranks at or above `required_tier`.
    pub fn plan_at_least(&self, plan_tier: &str, required_tier: &str) -> bool {
        PlanTier::from_key(plan_tier) >= PlanTier::from_key(required_tier)
    }

    /// Lowest tier that unlocks `feature`, if the feature is known.
    pub fn feature_min_plan(&self, feature: &str) -> Option<PlanTier> {
        self.feature_min_plan.get(feature).copied()
    }

    /// Access verdict for a navigation entry: visibility follows the role's
    /// permission; a visible entry whose feature the plan lacks is locked,
    /// with the upgrade target tier attached.
    pub fn nav_item_access(&self, nav_key: &str, role: &str, plan_tier: &str) -> NavAccess {
        let Some(item) = self.nav.get(nav_key) else {
            return NavAccess::hidden();
        };
        if !self.has_permission(role, &item.permission) {
            return NavAccess::hidden();
        }
        match &item.feature {
            Some(feature) if !self.plan_has_feature(plan_tier, feature) => NavAccess {
                visible: true,
                locked: true,
                required_plan: self.feature_min_plan(feature),
            },
            _ => NavAccess {
                visible: true,
                locked: false,
                required_plan: None,
            },
        }
    }

    /// Catalog integrity check, run after construction. A failure here is a
    /// configuration defect, not a runtime condition.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for tier in PlanTier::ALL {
            if !self.plans.contains_key(&tier) {
                return Err(PolicyError::Invalid(format!(
                    "plan tier '{tier}' missing from catalog"
                )));
            }
        }
        for role in Role::ALL {
            if !self.roles.contains_key(&role) {
                return Err(PolicyError::Invalid(format!(
                    "role '{role}' missing from catalog"
                )));
            }
        }
        for feature in self.feature_min_plan.keys() {
            let unlocked_somewhere = self
                .plans
                .values()
                .any(|spec| spec.features.contains(feature));
            if !unlocked_somewhere {
                return Err(PolicyError::Invalid(format!(
                    "feature '{feature}' has a minimum plan but no plan unlocks it"
                )));
            }
        }
        for (nav_key, item) in &self.nav {
            let granted_somewhere = self
                .roles
                .values()
                .any(|set| set.contains(&item.permission));
            if !granted_somewhere {
                return Err(PolicyError::Invalid(format!(
                    "nav '{nav_key}' references permission '{}' granted to no role",
                    item.permission
                )));
            }
            if let Some(feature) = &item.feature {
                if !self.feature_min_plan.contains_key(feature) {
                    return Err(PolicyError::Invalid(format!(
                        "nav '{nav_key}' references feature '{feature}' with no minimum plan"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Resolve the plan tier actually in effect for a business: an expired
/// `plan_expires_at` is an implicit downgrade to basic. This is derived
/// state; nothing is written back.
pub fn effective_plan(
    plan_tier: &str,
    plan_expires_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> PlanTier {
    match plan_expires_at {
        Some(expires_at) if expires_at < now => PlanTier::Basic,
        _ => PlanTier::from_key(plan_tier),
    }
}
