//! The gate itself: ordered permission → feature → limit evaluation.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use karobar_policy_center::AccessCatalog;
use tracing::{debug, warn};

use crate::errors::AccessError;
use crate::types::{AccessDecision, AccessErrorCode, AccessRequest, ActionResponse};

/// Approves or rejects operations against an immutable access catalog.
///
/// The catalog is injected at construction; the gate holds no other state
/// and can be shared freely across request-handling contexts.
#[derive(Clone)]
pub struct AccessGate {
    catalog: Arc<AccessCatalog>,
}

impl AccessGate {
    pub fn new(catalog: Arc<AccessCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AccessCatalog {
        &self.catalog
    }

    /// Evaluate a request. Checks run in a fixed order and short-circuit on
    /// the first failure, so error messaging is predictable: permission
    /// first, then plan feature, then plan limit.
    pub fn validate(&self, request: &AccessRequest) -> AccessDecision {
        if let Some(permission) = &request.permission {
            if !self.catalog.has_permission(&request.role, permission) {
                warn!(role = %request.role, permission = %permission, "permission denied");
                return AccessDecision::denied(
                    AccessErrorCode::PermissionDenied,
                    "You do not have permission to perform this action.",
                );
            }
        }

        if let Some(feature) = &request.feature {
            if !self.catalog.plan_has_feature(&request.plan_tier, feature) {
                let required = self.catalog.feature_min_plan(feature);
                warn!(
                    plan = %request.plan_tier,
                    feature = %feature,
                    required = ?required,
                    "feature gated by plan"
                );
                let message = match required {
                    Some(plan) => format!(
                        "This feature requires the {} plan. Upgrade to unlock it.",
                        plan.display_name()
                    ),
                    None => "This feature is not available on your current plan.".to_string(),
                };
                let mut decision =
                    AccessDecision::denied(AccessErrorCode::PlanUpgradeRequired, message);
                if let Some(plan) = required {
                    decision = decision.with_required_plan(plan);
                }
                return decision;
            }
        }

        if let (Some(limit_key), Some(count)) = (&request.limit_key, request.current_count) {
            if !self
                .catalog
                .plan_within_limit(&request.plan_tier, limit_key, count)
            {
                // plan_within_limit only fails on capped limits.
                let limit = self.catalog.plan_limit(&request.plan_tier, limit_key);
                warn!(
                    plan = %request.plan_tier,
                    limit_key = %limit_key,
                    count,
                    ?limit,
                    "plan limit reached"
                );
                let message = match limit {
                    Some(cap) => format!(
                        "Your plan allows up to {} {}. Upgrade to add more.",
                        cap,
                        limit_key.replace('_', " ")
                    ),
                    None => "Your plan's limit for this resource has been reached.".to_string(),
                };
                let mut decision =
                    AccessDecision::denied(AccessErrorCode::LimitReached, message);
                if let Some(cap) = limit {
                    decision = decision.with_limit(cap);
                }
                return decision;
            }
        }

        debug!(role = %request.role, plan = %request.plan_tier, "access granted");
        AccessDecision::granted()
    }

    /// Throwing variant of [`validate`](Self::validate) for callers that
    /// prefer `?` over inspecting a decision.
    pub fn enforce(&self, request: &AccessRequest) -> Result<(), AccessError> {
        let decision = self.validate(request);
        if decision.success {
            return Ok(());
        }
        let message = decision
            .message
            .clone()
            .unwrap_or_else(|| "Access denied.".to_string());
        Err(match decision.error_code {
            Some(AccessErrorCode::PlanUpgradeRequired) => AccessError::PlanUpgradeRequired {
                message,
                required_plan: decision.required_plan,
            },
            Some(AccessErrorCode::LimitReached) => AccessError::LimitReached {
                message,
                limit: decision.limit,
            },
            _ => AccessError::PermissionDenied { message },
        })
    }

    /// Compose the gate with a domain operation. On denial the decision is
    /// returned as-is; on approval the operation runs and a failure is
    /// normalized into `{success:false, error}`, the standard shape every
    /// server action returns.
    pub async fn guarded<T, E, Fut>(
        &self,
        request: &AccessRequest,
        operation: Fut,
    ) -> ActionResponse<T>
    where
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let decision = self.validate(request);
        if !decision.success {
            return ActionResponse::Denied(decision);
        }
        match operation.await {
            Ok(data) => ActionResponse::completed(data),
            Err(err) => {
                warn!(error = %err, "guarded operation failed");
                ActionResponse::failed(err.to_string())
            }
        }
    }
}
