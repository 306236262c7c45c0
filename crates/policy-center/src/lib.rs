pub mod api;
pub mod defaults;
pub mod errors;
pub mod loader;
pub mod model;

pub use api::effective_plan;
pub use defaults::{default_catalog, features, limits, permissions};
pub use errors::PolicyError;
pub use loader::{load_catalog, load_catalog_with_options, LoadOptions};
pub use model::{AccessCatalog, NavAccess, NavItem, PlanSpec};

#[cfg(test)]
mod tests;
