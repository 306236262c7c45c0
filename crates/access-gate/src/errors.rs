//! Error types for the throwing gate variant.

use karobar_core_types::{KarobarError, PlanTier};
use thiserror::Error;

use crate::types::{AccessDecision, AccessErrorCode};

/// Structured denial raised by `AccessGate::enforce` for callers that prefer
/// exception-style control flow. Carries the same fields as the decision it
/// was built from; always a recoverable, user-surfaceable condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("{message}")]
    PermissionDenied { message: String },

    #[error("{message}")]
    PlanUpgradeRequired {
        message: String,
        required_plan: Option<PlanTier>,
    },

    #[error("{message}")]
    LimitReached { message: String, limit: Option<u32> },
}

impl AccessError {
    pub fn code(&self) -> AccessErrorCode {
        match self {
            AccessError::PermissionDenied { .. } => AccessErrorCode::PermissionDenied,
            AccessError::PlanUpgradeRequired { .. } => AccessErrorCode::PlanUpgradeRequired,
            AccessError::LimitReached { .. } => AccessErrorCode::LimitReached,
        }
    }

    pub fn required_plan(&self) -> Option<PlanTier> {
        match self {
            AccessError::PlanUpgradeRequired { required_plan, .. } => *required_plan,
            _ => None,
        }
    }

    pub fn limit(&self) -> Option<u32> {
        match self {
            AccessError::LimitReached { limit, .. } => *limit,
            _ => None,
        }
    }

    /// Rebuild the decision shape, for callers that mix both styles.
    pub fn to_decision(&self) -> AccessDecision {
        let mut decision = AccessDecision::denied(self.code(), self.to_string());
        if let Some(plan) = self.required_plan() {
            decision = decision.with_required_plan(plan);
        }
        if let Some(limit) = self.limit() {
            decision = decision.with_limit(limit);
        }
        decision
    }
}

impl From<AccessError> for KarobarError {
    fn from(value: AccessError) -> Self {
        KarobarError::new(value.to_string())
    }
}
