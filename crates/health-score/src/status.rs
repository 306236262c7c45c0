//! Presentation-tier mapping from a numeric score to a status badge.

use serde::Serialize;

/// Label and styling tags for one health band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub label: &'static str,
    pub color: &'static str,
    pub background: &'static str,
    pub description: &'static str,
}

/// Band thresholds: ≥90 Excellent, ≥70 Good, ≥50 Fair, otherwise At Risk.
pub fn health_status(score: u8) -> HealthStatus {
    if score >= 90 {
        HealthStatus {
            label: "Excellent",
            color: "text-green-600",
            background: "bg-green-50",
            description: "Your business is performing exceptionally well.",
        }
    } else if score >= 70 {
        HealthStatus {
            label: "Good",
            color: "text-blue-600",
            background: "bg-blue-50",
            description: "Your business is on a healthy track.",
        }
    } else if score >= 50 {
        HealthStatus {
            label: "Fair",
            color: "text-amber-600",
            background: "bg-amber-50",
            description: "Some areas of your business need attention.",
        }
    } else {
        HealthStatus {
            label: "At Risk",
            color: "text-red-600",
            background: "bg-red-50",
            description: "Several indicators need urgent attention.",
        }
    }
}
