//! Pakistani tax calculation for Karobar: GST, provincial services tax,
//! withholding at source, FBR identifier validation, and invoice numbering.
//! Everything is a pure function of its inputs except the invoice number's
//! year component.

pub mod calculator;
pub mod errors;
pub mod fbr;
pub mod model;

pub use calculator::{
    calculate_provincial_tax, calculate_sales_tax, calculate_total_tax, calculate_withholding_tax,
};
pub use errors::TaxError;
pub use fbr::{fbr_invoice_number, rate_for_filer_status, validate_ntn, validate_srn};
pub use model::{RateSummary, TaxBreakdown, TaxConfiguration, DEFAULT_SALES_TAX_RATE};
