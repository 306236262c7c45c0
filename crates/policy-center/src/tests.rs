use chrono::{Duration, Utc};
use karobar_core_types::PlanTier;
use std::env;
use std::sync::{Mutex, OnceLock};

use crate::api::effective_plan;
use crate::defaults::{default_catalog, features, limits, permissions};
use crate::loader::load_catalog;

fn env_guard() -> &'static Mutex<()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(()))
}

#[test]
fn default_catalog_passes_integrity_check() {
    default_catalog().validate().expect("default catalog valid");
}

#[test]
fn owner_holds_every_permission_viewer_does_not() {
    let catalog = default_catalog();
    assert!(catalog.has_permission("owner", permissions::SETTINGS_MANAGE_BUSINESS));
    assert!(catalog.has_permission("owner", permissions::FINANCE_MANAGE_EXPENSES));
    assert!(!catalog.has_permission("viewer", permissions::FINANCE_MANAGE_EXPENSES));
    assert!(!catalog.has_permission("admin", permissions::SETTINGS_MANAGE_BUSINESS));
}

#[test]
fn unknown_role_has_viewer_permissions_only() {
    let catalog = default_catalog();
    assert!(!catalog.has_permission("superuser", permissions::POS_PROCESS_SALE));
    assert!(catalog.has_permission("superuser", permissions::DASHBOARD_VIEW));
    assert_eq!(
        catalog.permissions_for_role("superuser"),
        catalog.permissions_for_role("viewer")
    );
}

#[test]
fn role_rank_comparisons() {
    let catalog = default_catalog();
    assert!(catalog.is_role_at_least("admin", "manager"));
    assert!(catalog.is_role_at_least("manager", "manager"));
    assert!(!catalog.is_role_at_least("salesperson", "manager"));
    // Unknown roles rank lowest.
    assert!(!catalog.is_role_at_least("robot", "salesperson"));
    assert!(catalog.is_role_at_least("robot", "viewer"));
}

#[test]
fn plan_feature_lookup_defaults_unknown_tier_to_basic() {
    let catalog = default_catalog();
    assert!(catalog.plan_has_feature("premium", features::PAYROLL));
    assert!(!catalog.plan_has_feature("standard", features::PAYROLL));
    assert_eq!(
        catalog.plan_has_feature("platinum", features::ACCOUNTING),
        catalog.plan_has_feature("basic", features::ACCOUNTING)
    );
}

#[test]
fn plan_at_least_follows_tier_order() {
    let catalog = default_catalog();
    assert!(catalog.plan_at_least("premium", "standard"));
    assert!(!catalog.plan_at_least("basic", "standard"));
    assert!(catalog.plan_at_least("enterprise", "enterprise"));
}

#[test]
fn limits_cap_counts_and_enterprise_is_uncapped() {
    let catalog = default_catalog();
    assert!(catalog.plan_within_limit("basic", limits::MAX_PRODUCTS, 199));
    assert!(!catalog.plan_within_limit("basic", limits::MAX_PRODUCTS, 200));
    assert!(catalog.plan_within_limit("enterprise", limits::MAX_PRODUCTS, 1_000_000));
    // Unknown limit keys do not cap anything.
    assert!(catalog.plan_within_limit("basic", "max_widgets", u32::MAX));
}

#[test]
fn nav_access_visibility_and_plan_lock() {
    let catalog = default_catalog();

    let access = catalog.nav_item_access("payroll", "owner", "basic");
    assert!(access.visible);
    assert!(access.locked);
    assert_eq!(access.required_plan, Some(PlanTier::Premium));

    let access = catalog.nav_item_access("payroll", "owner", "premium");
    assert!(access.visible);
    assert!(!access.locked);

    // Salesperson has no payroll permission at all.
    let access = catalog.nav_item_access("payroll", "salesperson", "enterprise");
    assert!(!access.visible);

    let access = catalog.nav_item_access("no-such-nav", "owner", "enterprise");
    assert!(!access.visible);
    assert!(!access.locked);
}

#[test]
fn expired_plan_downgrades_to_basic() {
    let now = Utc::now();
    assert_eq!(
        effective_plan("premium", Some(now - Duration::days(1)), now),
        PlanTier::Basic
    );
    assert_eq!(
        effective_plan("premium", Some(now + Duration::days(30)), now),
        PlanTier::Premium
    );
    assert_eq!(effective_plan("premium", None, now), PlanTier::Premium);
}

#[test]
fn load_catalog_applies_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("policy.yaml");
    std::fs::write(
        &file_path,
        r#"plans:
  standard:
    limits:
      max_products: 5000
    features:
      payroll: true
feature_min_plan:
  payroll: standard
"#,
    )
    .unwrap();

    let catalog = load_catalog(Some(&file_path)).unwrap();
    assert_eq!(
        catalog.plan_limit("standard", limits::MAX_PRODUCTS),
        Some(5000)
    );
    assert!(catalog.plan_has_feature("standard", features::PAYROLL));
    assert_eq!(
        catalog.feature_min_plan(features::PAYROLL),
        Some(PlanTier::Standard)
    );
}

#[test]
fn load_catalog_rejects_unknown_tier_in_override() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("policy.yaml");
    std::fs::write(
        &file_path,
        "plans:\n  platinum:\n    limits:\n      max_products: 5\n",
    )
    .unwrap();

    assert!(load_catalog(Some(&file_path)).is_err());
}

#[test]
fn env_override_applies() {
    let _guard = env_guard().lock().unwrap();
    let key = "KAROBAR_POLICY__PLANS__BASIC__LIMITS__MAX_USERS";
    env::set_var(key, "7");
    let catalog = load_catalog(None).expect("load catalog");
    env::remove_var(key);
    assert_eq!(catalog.plan_limit("basic", limits::MAX_USERS), Some(7));
}

#[test]
fn env_override_null_means_uncapped() {
    let _guard = env_guard().lock().unwrap();
    let key = "KAROBAR_POLICY__PLANS__BASIC__LIMITS__MAX_BRANCHES";
    env::set_var(key, "null");
    let catalog = load_catalog(None).expect("load catalog");
    env::remove_var(key);
    assert_eq!(catalog.plan_limit("basic", limits::MAX_BRANCHES), None);
    assert!(catalog.plan_within_limit("basic", limits::MAX_BRANCHES, u32::MAX));
}
