//! Compiled-in default catalogs. These are the shipped role/plan tables;
//! deployments override individual entries through the loader.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use karobar_core_types::{PlanTier, Role};

use crate::model::{AccessCatalog, NavItem, PlanSpec};

/// Feature keys.
pub mod features {
    pub const INVENTORY: &str = "inventory";
    pub const INVOICING: &str = "invoicing";
    pub const POS: &str = "pos";
    pub const ACCOUNTING: &str = "accounting";
    pub const REPORTS: &str = "reports";
    pub const PAYROLL: &str = "payroll";
    pub const MANUFACTURING: &str = "manufacturing";
    pub const MULTI_BRANCH: &str = "multi_branch";
    pub const API_ACCESS: &str = "api_access";
    pub const AI_INSIGHTS: &str = "ai_insights";
}

/// Limit keys.
pub mod limits {
    pub const MAX_PRODUCTS: &str = "max_products";
    pub const MAX_INVOICES_PER_MONTH: &str = "max_invoices_per_month";
    pub const MAX_USERS: &str = "max_users";
    pub const MAX_BRANCHES: &str = "max_branches";
}

/// Permission keys.
pub mod permissions {
    pub const DASHBOARD_VIEW: &str = "dashboard.view";
    pub const INVENTORY_VIEW: &str = "inventory.view";
    pub const INVENTORY_MANAGE: &str = "inventory.manage";
    pub const INVOICES_VIEW: &str = "invoices.view";
    pub const INVOICES_CREATE: &str = "invoices.create";
    pub const INVOICES_MANAGE: &str = "invoices.manage";
    pub const POS_PROCESS_SALE: &str = "pos.process_sale";
    pub const FINANCE_VIEW_REPORTS: &str = "finance.view_reports";
    pub const FINANCE_MANAGE_EXPENSES: &str = "finance.manage_expenses";
    pub const ACCOUNTING_MANAGE_LEDGER: &str = "accounting.manage_ledger";
    pub const PAYROLL_MANAGE: &str = "payroll.manage";
    pub const MANUFACTURING_MANAGE_BOMS: &str = "manufacturing.manage_boms";
    pub const SETTINGS_MANAGE_BUSINESS: &str = "settings.manage_business";
    pub const SETTINGS_MANAGE_USERS: &str = "settings.manage_users";
    pub const SETTINGS_MANAGE_TAX: &str = "settings.manage_tax";
}

use features as f;
use limits as l;
use permissions as p;

fn permission_set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn feature_set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn limit_map(entries: &[(&str, Option<u32>)]) -> BTreeMap<String, Option<u32>> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

/// All permission keys, i.e. the owner's set.
fn all_permissions() -> BTreeSet<String> {
    permission_set(&[
        p::DASHBOARD_VIEW,
        p::INVENTORY_VIEW,
        p::INVENTORY_MANAGE,
        p::INVOICES_VIEW,
        p::INVOICES_CREATE,
        p::INVOICES_MANAGE,
        p::POS_PROCESS_SALE,
        p::FINANCE_VIEW_REPORTS,
        p::FINANCE_MANAGE_EXPENSES,
        p::ACCOUNTING_MANAGE_LEDGER,
        p::PAYROLL_MANAGE,
        p::MANUFACTURING_MANAGE_BOMS,
        p::SETTINGS_MANAGE_BUSINESS,
        p::SETTINGS_MANAGE_USERS,
        p::SETTINGS_MANAGE_TAX,
    ])
}

pub fn default_catalog() -> AccessCatalog {
    let mut roles = HashMap::new();
    roles.insert(Role::Owner, all_permissions());

    // Admin: everything except ownership transfer / business settings.
    let mut admin = all_permissions();
    admin.remove(p::SETTINGS_MANAGE_BUSINESS);
    roles.insert(Role::Admin, admin);

    roles.insert(
        Role::Manager,
        permission_set(&[
            p::DASHBOARD_VIEW,
            p::INVENTORY_VIEW,
            p::INVENTORY_MANAGE,
            p::INVOICES_VIEW,
            p::INVOICES_CREATE,
            p::INVOICES_MANAGE,
            p::POS_PROCESS_SALE,
            p::FINANCE_VIEW_REPORTS,
            p::MANUFACTURING_MANAGE_BOMS,
        ]),
    );
    roles.insert(
        Role::Salesperson,
        permission_set(&[
            p::DASHBOARD_VIEW,
            p::INVENTORY_VIEW,
            p::INVOICES_VIEW,
            p::INVOICES_CREATE,
            p::POS_PROCESS_SALE,
        ]),
    );
    roles.insert(
        Role::Viewer,
        permission_set(&[p::DASHBOARD_VIEW, p::INVENTORY_VIEW, p::INVOICES_VIEW]),
    );

    let mut plans = BTreeMap::new();
    plans.insert(
        PlanTier::Basic,
        PlanSpec {
            features: feature_set(&[f::INVENTORY, f::INVOICING, f::POS]),
            limits: limit_map(&[
                (l::MAX_PRODUCTS, Some(200)),
                (l::MAX_INVOICES_PER_MONTH, Some(100)),
                (l::MAX_USERS, Some(2)),
                (l::MAX_BRANCHES, Some(1)),
            ]),
        },
    );
    plans.insert(
        PlanTier::Standard,
        PlanSpec {
            features: feature_set(&[
                f::INVENTORY,
                f::INVOICING,
                f::POS,
                f::ACCOUNTING,
                f::REPORTS,
            ]),
            limits: limit_map(&[
                (l::MAX_PRODUCTS, Some(2_000)),
                (l::MAX_INVOICES_PER_MONTH, Some(1_000)),
                (l::MAX_USERS, Some(10)),
                (l::MAX_BRANCHES, Some(3)),
            ]),
        },
    );
    plans.insert(
        PlanTier::Premium,
        PlanSpec {
            features: feature_set(&[
                f::INVENTORY,
                f::INVOICING,
                f::POS,
                f::ACCOUNTING,
                f::REPORTS,
                f::PAYROLL,
                f::MANUFACTURING,
                f::MULTI_BRANCH,
            ]),
            limits: limit_map(&[
                (l::MAX_PRODUCTS, Some(20_000)),
                (l::MAX_INVOICES_PER_MONTH, Some(10_000)),
                (l::MAX_USERS, Some(50)),
                (l::MAX_BRANCHES, Some(10)),
            ]),
        },
    );
    plans.insert(
        PlanTier::Enterprise,
        PlanSpec {
            features: feature_set(&[
                f::INVENTORY,
                f::INVOICING,
                f::POS,
                f::ACCOUNTING,
                f::REPORTS,
                f::PAYROLL,
                f::MANUFACTURING,
                f::MULTI_BRANCH,
                f::API_ACCESS,
                f::AI_INSIGHTS,
            ]),
            limits: limit_map(&[
                (l::MAX_PRODUCTS, None),
                (l::MAX_INVOICES_PER_MONTH, None),
                (l::MAX_USERS, None),
                (l::MAX_BRANCHES, None),
            ]),
        },
    );

    let feature_min_plan = [
        (f::INVENTORY, PlanTier::Basic),
        (f::INVOICING, PlanTier::Basic),
        (f::POS, PlanTier::Basic),
        (f::ACCOUNTING, PlanTier::Standard),
        (f::REPORTS, PlanTier::Standard),
        (f::PAYROLL, PlanTier::Premium),
        (f::MANUFACTURING, PlanTier::Premium),
        (f::MULTI_BRANCH, PlanTier::Premium),
        (f::API_ACCESS, PlanTier::Enterprise),
        (f::AI_INSIGHTS, PlanTier::Enterprise),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let nav = [
        ("dashboard", p::DASHBOARD_VIEW, None),
        ("inventory", p::INVENTORY_VIEW, Some(f::INVENTORY)),
        ("invoices", p::INVOICES_VIEW, Some(f::INVOICING)),
        ("pos", p::POS_PROCESS_SALE, Some(f::POS)),
        ("accounting", p::ACCOUNTING_MANAGE_LEDGER, Some(f::ACCOUNTING)),
        ("reports", p::FINANCE_VIEW_REPORTS, Some(f::REPORTS)),
        ("payroll", p::PAYROLL_MANAGE, Some(f::PAYROLL)),
        (
            "manufacturing",
            p::MANUFACTURING_MANAGE_BOMS,
            Some(f::MANUFACTURING),
        ),
        ("settings", p::SETTINGS_MANAGE_USERS, None),
    ]
    .into_iter()
    .map(|(key, permission, feature)| {
        (
            key.to_string(),
            NavItem {
                permission: permission.to_string(),
                feature: feature.map(|f| f.to_string()),
            },
        )
    })
    .collect();

    AccessCatalog {
        roles,
        plans,
        feature_min_plan,
        nav,
    }
}
