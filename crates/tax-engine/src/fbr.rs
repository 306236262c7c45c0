//! FBR identifier validation, filer-status rate adjustment, and invoice
//! numbering.

use chrono::{Datelike, Utc};
use karobar_core_types::FilerStatus;
use once_cell::sync::Lazy;
use regex::Regex;

// NTN: 7 digits, hyphen, 1 check digit.
static NTN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{7}-\d$").expect("valid pattern"));

/// Validate a National Tax Number (`1234567-8`).
pub fn validate_ntn(ntn: &str) -> bool {
    NTN_PATTERN.is_match(ntn)
}

/// Validate a Sales tax Registration Number. Intentionally permissive: any
/// value of at least 8 characters after trimming passes.
pub fn validate_srn(srn: &str) -> bool {
    srn.trim().len() >= 8
}

/// Non-filers pay double the base rate, per the non-filer penalty regime.
pub fn rate_for_filer_status(base_rate: f64, filer_status: FilerStatus) -> f64 {
    match filer_status {
        FilerStatus::Filer => base_rate,
        FilerStatus::NonFiler => base_rate * 2.0,
    }
}

/// `FBR-{first 4 chars of the business id, uppercased}-{year}-{sequence,
/// zero-padded to 6}`. The year is the current UTC year, so the only
/// non-determinism in this crate lives here.
pub fn fbr_invoice_number(business_id: &str, sequence_number: u64) -> String {
    fbr_invoice_number_for_year(business_id, sequence_number, Utc::now().year())
}

pub(crate) fn fbr_invoice_number_for_year(
    business_id: &str,
    sequence_number: u64,
    year: i32,
) -> String {
    let prefix: String = business_id.chars().take(4).collect();
    let prefix = prefix.to_uppercase();
    format!("FBR-{prefix}-{year}-{sequence_number:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ntn_format_is_seven_digits_hyphen_check_digit() {
        assert!(validate_ntn("1234567-8"));
        assert!(!validate_ntn("123456-8"));
        assert!(!validate_ntn("12345678-9"));
        assert!(!validate_ntn("1234567-88"));
        assert!(!validate_ntn("1234567"));
        assert!(!validate_ntn(""));
    }

    #[test]
    fn srn_is_loosely_validated_by_length() {
        assert!(validate_srn("12345678"));
        assert!(validate_srn("  SRN-0099  "));
        assert!(!validate_srn("1234567"));
        assert!(!validate_srn("        "));
    }

    #[test]
    fn non_filer_pays_double() {
        assert_eq!(rate_for_filer_status(10.0, FilerStatus::NonFiler), 20.0);
        assert_eq!(rate_for_filer_status(10.0, FilerStatus::Filer), 10.0);
    }

    #[test]
    fn invoice_number_shape() {
        assert_eq!(
            fbr_invoice_number_for_year("ab12-business", 42, 2025),
            "FBR-AB12-2025-000042"
        );
        // Ids shorter than four characters use what they have.
        assert_eq!(fbr_invoice_number_for_year("xy", 1, 2025), "FBR-XY-2025-000001");
    }

    #[test]
    fn invoice_number_uses_current_year() {
        let number = fbr_invoice_number("karachi-001", 7);
        let year = chrono::Utc::now().year();
        assert_eq!(number, format!("FBR-KARA-{year}-000007"));
    }
}
