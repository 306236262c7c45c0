//! The health heuristic: a fixed base with additive and subtractive
//! adjustments, applied in a fixed order, clamped to [0, 100].

use tracing::debug;

use crate::metrics::BusinessMetrics;

/// Compute the 0–100 health index for a metrics snapshot. Recomputed on
/// every read; nothing is stored.
pub fn calculate_business_health(metrics: &BusinessMetrics) -> u8 {
    let mut score: f64 = 70.0;

    // Profitability.
    let margin = if metrics.revenue > 0.0 {
        metrics.gross_profit / metrics.revenue
    } else {
        0.0
    };
    if margin > 0.4 {
        score += 15.0;
    } else if margin > 0.2 {
        score += 10.0;
    } else if margin > 0.1 {
        score += 5.0;
    } else if margin < 0.05 && metrics.revenue > 0.0 {
        // A trivially-zero margin with no revenue is not penalized.
        score -= 10.0;
    }

    // Stock coverage. No inventory at all counts as perfectly healthy.
    let stock_health = if metrics.total_products > 0 {
        f64::from(metrics.total_products.saturating_sub(metrics.low_stock_count))
            / f64::from(metrics.total_products)
    } else {
        1.0
    };
    if stock_health > 0.95 {
        score += 10.0;
    } else if stock_health < 0.7 {
        score -= 15.0;
    }

    // Collections pressure.
    if metrics.revenue > 0.0 && metrics.accounts_receivable > metrics.revenue * 0.5 {
        score -= 15.0;
    }
    if metrics.pending_invoices > 10 {
        score -= 5.0;
    }

    // Scale bonus.
    if metrics.revenue > 1_000_000.0 {
        score += 5.0;
    }

    let clamped = score.round().clamp(0.0, 100.0) as u8;
    debug!(margin, stock_health, score = clamped, "computed business health");
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metrics_score_eighty() {
        // Base 70, no revenue so no margin adjustment either way, empty
        // inventory counts as healthy stock (+10).
        assert_eq!(calculate_business_health(&BusinessMetrics::default()), 80);
    }

    #[test]
    fn strong_margin_and_no_inventory() {
        let metrics = BusinessMetrics {
            revenue: 100.0,
            gross_profit: 50.0,
            ..Default::default()
        };
        assert_eq!(calculate_business_health(&metrics), 95);
    }

    #[test]
    fn thin_margin_is_penalized_only_with_revenue() {
        let metrics = BusinessMetrics {
            revenue: 1_000.0,
            gross_profit: 10.0, // 1% margin
            ..Default::default()
        };
        // 70 - 10 (margin) + 10 (no inventory) = 70
        assert_eq!(calculate_business_health(&metrics), 70);
    }

    #[test]
    fn mid_margin_band_has_no_adjustment() {
        let metrics = BusinessMetrics {
            revenue: 1_000.0,
            gross_profit: 70.0, // 7% margin: between 5% and 10%
            ..Default::default()
        };
        assert_eq!(calculate_business_health(&metrics), 80);
    }

    #[test]
    fn widespread_low_stock_is_penalized() {
        let metrics = BusinessMetrics {
            total_products: 100,
            low_stock_count: 40, // stock health 0.6
            ..Default::default()
        };
        // 70 - 15 = 55
        assert_eq!(calculate_business_health(&metrics), 55);
    }

    #[test]
    fn receivables_and_invoice_backlog_penalties() {
        let metrics = BusinessMetrics {
            revenue: 1_000.0,
            gross_profit: 500.0,      // +15
            accounts_receivable: 600.0, // > half of revenue: -15
            pending_invoices: 11,     // -5
            total_products: 100,
            low_stock_count: 2,       // 0.98: +10
            ..Default::default()
        };
        // 70 + 15 + 10 - 15 - 5 = 75
        assert_eq!(calculate_business_health(&metrics), 75);
    }

    #[test]
    fn large_revenue_bonus() {
        let metrics = BusinessMetrics {
            revenue: 2_000_000.0,
            gross_profit: 1_000_000.0, // +15
            ..Default::default()
        };
        // 70 + 15 + 10 + 5 = 100
        assert_eq!(calculate_business_health(&metrics), 100);
    }

    #[test]
    fn score_is_clamped_to_bounds() {
        let metrics = BusinessMetrics {
            revenue: 2_000_000.0,
            gross_profit: 1_000_000.0,
            ..Default::default()
        };
        assert!(calculate_business_health(&metrics) <= 100);

        let metrics = BusinessMetrics {
            revenue: 1_000.0,
            gross_profit: 0.0,
            accounts_receivable: 900.0,
            total_products: 10,
            low_stock_count: 10,
            pending_invoices: 50,
            ..Default::default()
        };
        // 70 - 10 - 15 - 15 - 5 = 25, well inside bounds but every penalty hit.
        assert_eq!(calculate_business_health(&metrics), 25);
    }
}
