//! Tax configuration and breakdown types.

use karobar_core_types::FilerStatus;
use serde::{Deserialize, Serialize};

use crate::errors::TaxError;

/// Standard sales tax rate applied when a business has no configuration.
pub const DEFAULT_SALES_TAX_RATE: f64 = 17.0;

/// A business's persisted tax settings. Arrives from the persistence layer
/// as a loosely-filled record, so every field carries a serde default;
/// `validate` normalizes it at the boundary before any calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    /// GST percentage.
    #[serde(default = "default_sales_tax_rate")]
    pub sales_tax_rate: f64,

    /// Provincial services tax percentage.
    #[serde(default)]
    pub provincial_tax_rate: f64,

    /// Withholding percentage, only applied when
    /// `withholding_tax_applicable` is set.
    #[serde(default)]
    pub withholding_tax_rate: f64,

    #[serde(default)]
    pub withholding_tax_applicable: bool,

    /// FBR registration status.
    #[serde(default)]
    pub filer_status: FilerStatus,
}

fn default_sales_tax_rate() -> f64 {
    DEFAULT_SALES_TAX_RATE
}

impl Default for TaxConfiguration {
    fn default() -> Self {
        Self {
            sales_tax_rate: DEFAULT_SALES_TAX_RATE,
            provincial_tax_rate: 0.0,
            withholding_tax_rate: 0.0,
            withholding_tax_applicable: false,
            filer_status: FilerStatus::NonFiler,
        }
    }
}

impl TaxConfiguration {
    /// Boundary check: rates must be non-negative. A failure here is a bad
    /// configuration record, not a runtime condition.
    pub fn validate(&self) -> Result<(), TaxError> {
        for (field, rate) in [
            ("sales_tax_rate", self.sales_tax_rate),
            ("provincial_tax_rate", self.provincial_tax_rate),
            ("withholding_tax_rate", self.withholding_tax_rate),
        ] {
            if rate < 0.0 || !rate.is_finite() {
                tracing::warn!(field, rate, "rejecting tax configuration");
                return Err(TaxError::InvalidRate { field, rate });
            }
        }
        Ok(())
    }
}

/// Per-rate summary echoed back with every breakdown. The withholding rate
/// reads 0 when withholding is not applicable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSummary {
    pub sales_tax_rate: f64,
    pub provincial_tax_rate: f64,
    pub withholding_tax_rate: f64,
    pub filer_status: FilerStatus,
}

/// Full tax computation for one subtotal.
///
/// `total_tax` is sales + provincial only: withholding is a deduction at
/// source, reducing `net_amount` without being an additional charge to the
/// payer. That asymmetry is how the product accounts for withholding; do
/// not fold withholding into `total_tax`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub sales_tax: f64,
    pub provincial_tax: f64,
    pub withholding_tax: f64,
    pub total_tax: f64,
    pub net_amount: f64,
    pub breakdown: RateSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use karobar_core_types::FilerStatus;

    #[test]
    fn partial_record_fills_defaults() {
        let config: TaxConfiguration =
            serde_json::from_str(r#"{"provincial_tax_rate": 2.5}"#).unwrap();
        assert_eq!(config.sales_tax_rate, 17.0);
        assert_eq!(config.provincial_tax_rate, 2.5);
        assert!(!config.withholding_tax_applicable);
        assert_eq!(config.filer_status, FilerStatus::NonFiler);
    }

    #[test]
    fn empty_record_is_the_default_configuration() {
        let config: TaxConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TaxConfiguration::default());
    }
}
