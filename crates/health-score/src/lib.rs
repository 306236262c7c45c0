//! Business health index: a weighted heuristic over aggregate financial and
//! operational metrics, rendered as a dashboard badge.

pub mod metrics;
pub mod scorer;
pub mod status;

pub use metrics::BusinessMetrics;
pub use scorer::calculate_business_health;
pub use status::{health_status, HealthStatus};
