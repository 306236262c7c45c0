//! Request and decision types for the access gate.

use karobar_core_types::PlanTier;
use serde::{Deserialize, Serialize};

/// One access check, as assembled by a server action before it touches any
/// domain data. `role` and `plan_tier` are the raw persisted key strings;
/// the catalogs resolve unknown keys restrictively. Callers must normalize
/// an expired plan to `basic` (see `effective_plan`) before building this;
/// the gate itself does no date arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Membership role key.
    pub role: String,

    /// Subscription tier key.
    pub plan_tier: String,

    /// Permission the action requires, if any.
    pub permission: Option<String>,

    /// Feature the action requires, if any.
    pub feature: Option<String>,

    /// Limit to check the current usage count against, if any.
    pub limit_key: Option<String>,

    /// Current usage count for `limit_key`. The limit check only runs when
    /// both are supplied.
    pub current_count: Option<u32>,
}

impl AccessRequest {
    pub fn new(role: impl Into<String>, plan_tier: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            plan_tier: plan_tier.into(),
            permission: None,
            feature: None,
            limit_key: None,
            current_count: None,
        }
    }

    /// Require a permission.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Require a plan feature.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Require headroom under a plan limit.
    pub fn with_limit(mut self, limit_key: impl Into<String>, current_count: u32) -> Self {
        self.limit_key = Some(limit_key.into());
        self.current_count = Some(current_count);
        self
    }
}

/// Why an access request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessErrorCode {
    /// The role lacks the required permission.
    PermissionDenied,

    /// The feature is gated behind a higher subscription tier.
    PlanUpgradeRequired,

    /// A countable resource hit its plan-defined cap.
    LimitReached,
}

/// Outcome of one access check. Produced fresh per call, never persisted.
/// Messages are end-user-readable; `required_plan` drives upgrade prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether the request is approved.
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<AccessErrorCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Minimum tier that would approve the request, on plan denials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_plan: Option<PlanTier>,

    /// The cap that was hit, on limit denials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl AccessDecision {
    /// Approve.
    pub fn granted() -> Self {
        Self {
            success: true,
            error_code: None,
            message: None,
            required_plan: None,
            limit: None,
        }
    }

    /// Reject with a code and user-facing message.
    pub fn denied(code: AccessErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_code: Some(code),
            message: Some(message.into()),
            required_plan: None,
            limit: None,
        }
    }

    /// Attach the upgrade target tier.
    pub fn with_required_plan(mut self, plan: PlanTier) -> Self {
        self.required_plan = Some(plan);
        self
    }

    /// Attach the cap that was hit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The standard shape every server action returns: the denial decision
/// as-is, or `{success:true, data}` / `{success:false, error}` from running
/// the wrapped operation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ActionResponse<T> {
    Denied(AccessDecision),
    Completed { success: bool, data: T },
    Failed { success: bool, error: String },
}

impl<T> ActionResponse<T> {
    pub fn completed(data: T) -> Self {
        Self::Completed {
            success: true,
            data,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            success: false,
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// The denial decision, when the gate rejected the request.
    pub fn denial(&self) -> Option<&AccessDecision> {
        match self {
            Self::Denied(decision) => Some(decision),
            _ => None,
        }
    }
}
