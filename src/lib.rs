//! Karobar policy core
//!
//! The access-control, tax-calculation, and business-health layer every
//! money-moving server action in the Karobar platform goes through. This
//! crate is a facade over the workspace members:
//!
//! - `karobar-core-types`: roles, plan tiers, filer status, shared error
//! - `karobar-policy-center`: permission/plan catalogs and their evaluator
//! - `karobar-access-gate`: the guard layer producing access decisions
//! - `karobar-tax-engine`: Pakistani tax arithmetic and FBR numbering
//! - `karobar-health-score`: the 0–100 business health heuristic

pub use karobar_access_gate as access_gate;
pub use karobar_core_types as core_types;
pub use karobar_health_score as health_score;
pub use karobar_policy_center as policy_center;
pub use karobar_tax_engine as tax_engine;

// Re-export commonly used types for external use
pub use karobar_access_gate::{
    AccessDecision, AccessError, AccessErrorCode, AccessGate, AccessRequest, ActionResponse,
};
pub use karobar_core_types::{BusinessId, FilerStatus, KarobarError, PlanTier, Role};
pub use karobar_health_score::{
    calculate_business_health, health_status, BusinessMetrics, HealthStatus,
};
pub use karobar_policy_center::{
    default_catalog, effective_plan, load_catalog, AccessCatalog, NavAccess,
};
pub use karobar_tax_engine::{
    calculate_total_tax, fbr_invoice_number, rate_for_filer_status, validate_ntn, validate_srn,
    TaxBreakdown, TaxConfiguration,
};
