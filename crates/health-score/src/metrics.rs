use serde::{Deserialize, Serialize};

/// Snapshot of aggregate financial/operational metrics for one business,
/// as assembled by the dashboard query layer. Records arrive with optional
/// fields, so everything defaults to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    #[serde(default)]
    pub revenue: f64,

    #[serde(default)]
    pub gross_profit: f64,

    #[serde(default)]
    pub inventory_value: f64,

    #[serde(default)]
    pub accounts_receivable: f64,

    #[serde(default)]
    pub low_stock_count: u32,

    #[serde(default)]
    pub total_products: u32,

    #[serde(default)]
    pub pending_invoices: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_fills_defaults() {
        let metrics: BusinessMetrics =
            serde_json::from_str(r#"{"revenue": 1200.5, "pending_invoices": 3}"#).unwrap();
        assert_eq!(metrics.revenue, 1200.5);
        assert_eq!(metrics.pending_invoices, 3);
        assert_eq!(metrics.gross_profit, 0.0);
        assert_eq!(metrics.total_products, 0);
    }
}
