//! Guard layer for Karobar server actions: composes role permissions, plan
//! features, and plan limits into a single ordered access check.

pub mod errors;
pub mod types;
pub mod validator;

pub use errors::AccessError;
pub use types::{AccessDecision, AccessErrorCode, AccessRequest, ActionResponse};
pub use validator::AccessGate;
