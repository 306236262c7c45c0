//! Pure tax arithmetic over a [`TaxConfiguration`]. Every function accepts
//! `Option<&TaxConfiguration>`; an absent configuration means the hardcoded
//! defaults (17% sales tax, Non-Filer, no withholding).

use crate::model::{RateSummary, TaxBreakdown, TaxConfiguration};

fn resolve(config: Option<&TaxConfiguration>) -> TaxConfiguration {
    config.cloned().unwrap_or_default()
}

/// `amount * sales_rate / 100`.
pub fn calculate_sales_tax(amount: f64, config: Option<&TaxConfiguration>) -> f64 {
    amount * resolve(config).sales_tax_rate / 100.0
}

/// `amount * provincial_rate / 100`; the rate defaults to 0.
pub fn calculate_provincial_tax(amount: f64, config: Option<&TaxConfiguration>) -> f64 {
    amount * resolve(config).provincial_tax_rate / 100.0
}

/// Withholding deducted at source: 0 unless the configuration marks
/// withholding applicable.
pub fn calculate_withholding_tax(amount: f64, config: Option<&TaxConfiguration>) -> f64 {
    let config = resolve(config);
    if !config.withholding_tax_applicable {
        return 0.0;
    }
    amount * config.withholding_tax_rate / 100.0
}

/// Full breakdown for a subtotal. Withholding reduces `net_amount` but is
/// excluded from `total_tax` (see [`TaxBreakdown`]).
pub fn calculate_total_tax(subtotal: f64, config: Option<&TaxConfiguration>) -> TaxBreakdown {
    let config = resolve(config);
    let sales_tax = subtotal * config.sales_tax_rate / 100.0;
    let provincial_tax = subtotal * config.provincial_tax_rate / 100.0;
    let withholding_tax = if config.withholding_tax_applicable {
        subtotal * config.withholding_tax_rate / 100.0
    } else {
        0.0
    };

    TaxBreakdown {
        sales_tax,
        provincial_tax,
        withholding_tax,
        total_tax: sales_tax + provincial_tax,
        net_amount: subtotal + sales_tax + provincial_tax - withholding_tax,
        breakdown: RateSummary {
            sales_tax_rate: config.sales_tax_rate,
            provincial_tax_rate: config.provincial_tax_rate,
            withholding_tax_rate: if config.withholding_tax_applicable {
                config.withholding_tax_rate
            } else {
                0.0
            },
            filer_status: config.filer_status,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karobar_core_types::FilerStatus;

    fn config(
        sales: f64,
        provincial: f64,
        withholding: f64,
        applicable: bool,
    ) -> TaxConfiguration {
        TaxConfiguration {
            sales_tax_rate: sales,
            provincial_tax_rate: provincial,
            withholding_tax_rate: withholding,
            withholding_tax_applicable: applicable,
            filer_status: FilerStatus::NonFiler,
        }
    }

    #[test]
    fn missing_config_uses_seventeen_percent_default() {
        assert_eq!(calculate_sales_tax(1000.0, None), 170.0);
        assert_eq!(calculate_provincial_tax(1000.0, None), 0.0);
        assert_eq!(calculate_withholding_tax(1000.0, None), 0.0);
    }

    #[test]
    fn withholding_is_zero_unless_applicable() {
        let cfg = config(17.0, 0.0, 5.0, false);
        assert_eq!(calculate_withholding_tax(1000.0, Some(&cfg)), 0.0);
        let cfg = config(17.0, 0.0, 5.0, true);
        assert_eq!(calculate_withholding_tax(1000.0, Some(&cfg)), 50.0);
    }

    #[test]
    fn breakdown_without_withholding() {
        let cfg = config(17.0, 0.0, 0.0, false);
        let breakdown = calculate_total_tax(1000.0, Some(&cfg));
        assert_eq!(breakdown.sales_tax, 170.0);
        assert_eq!(breakdown.provincial_tax, 0.0);
        assert_eq!(breakdown.withholding_tax, 0.0);
        assert_eq!(breakdown.total_tax, 170.0);
        assert_eq!(breakdown.net_amount, 1170.0);
    }

    #[test]
    fn withholding_reduces_net_amount_but_not_total_tax() {
        let cfg = config(17.0, 2.0, 5.0, true);
        let breakdown = calculate_total_tax(1000.0, Some(&cfg));
        assert_eq!(breakdown.sales_tax, 170.0);
        assert_eq!(breakdown.provincial_tax, 20.0);
        assert_eq!(breakdown.withholding_tax, 50.0);
        assert_eq!(breakdown.total_tax, 190.0);
        assert_eq!(breakdown.net_amount, 1140.0);
    }

    #[test]
    fn rate_summary_echoes_rates_used() {
        let cfg = config(17.0, 2.0, 5.0, false);
        let breakdown = calculate_total_tax(1000.0, Some(&cfg));
        assert_eq!(breakdown.breakdown.sales_tax_rate, 17.0);
        assert_eq!(breakdown.breakdown.provincial_tax_rate, 2.0);
        // Not applicable, so the withholding rate reads 0.
        assert_eq!(breakdown.breakdown.withholding_tax_rate, 0.0);
        assert_eq!(breakdown.breakdown.filer_status, FilerStatus::NonFiler);
    }

    #[test]
    fn negative_rate_fails_validation() {
        let cfg = config(-1.0, 0.0, 0.0, false);
        assert!(cfg.validate().is_err());
        assert!(config(17.0, 2.0, 5.0, true).validate().is_ok());
    }
}
