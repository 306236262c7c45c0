//! Catalog construction: compiled-in defaults overlaid with deployment
//! overrides from an optional YAML file and `KAROBAR_POLICY__*` environment
//! variables. Supported override paths:
//!
//! - `plans.<tier>.limits.<limit_key>`: integer cap, or null for uncapped
//! - `plans.<tier>.features.<feature_key>`: bool, grants or revokes
//! - `feature_min_plan.<feature_key>`: plan tier key

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use karobar_core_types::PlanTier;
use serde_json::Value;
use tracing::debug;

use crate::defaults::default_catalog;
use crate::errors::PolicyError;
use crate::model::AccessCatalog;

const ENV_PREFIX: &str = "KAROBAR_POLICY__";

#[derive(Debug, Default)]
pub struct LoadOptions {
    pub paths: Vec<PathBuf>,
    pub include_env: bool,
}

impl LoadOptions {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
            include_env: true,
        }
    }
}

/// Build the catalog from defaults plus an optional override file and the
/// environment, then run the integrity check.
pub fn load_catalog(path: Option<&Path>) -> Result<AccessCatalog, PolicyError> {
    let mut options = LoadOptions::default();
    if let Some(p) = path {
        options.paths.push(p.to_path_buf());
    }
    options.include_env = true;
    load_catalog_with_options(&options)
}

pub fn load_catalog_with_options(options: &LoadOptions) -> Result<AccessCatalog, PolicyError> {
    let mut catalog = default_catalog();

    for path in &options.paths {
        if path.exists() {
            for (dotted, value) in overrides_from_file(path)? {
                apply_override(&mut catalog, &dotted, &value)?;
            }
        }
    }

    if options.include_env {
        for (dotted, value) in overrides_from_env() {
            apply_override(&mut catalog, &dotted, &value)?;
        }
    }

    catalog.validate()?;
    Ok(catalog)
}

fn overrides_from_file(path: &Path) -> Result<Vec<(String, Value)>, PolicyError> {
    let content = fs::read_to_string(path).map_err(|err| PolicyError::Io(err.to_string()))?;
    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|err| PolicyError::Invalid(err.to_string()))?;
    let json_value =
        serde_json::to_value(yaml_value).map_err(|err| PolicyError::Invalid(err.to_string()))?;
    Ok(flatten_value(json_value, None))
}

fn overrides_from_env() -> Vec<(String, Value)> {
    let mut overrides = Vec::new();
    for (key, raw) in env::vars() {
        if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
            let dotted = stripped
                .split("__")
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.to_ascii_lowercase())
                .collect::<Vec<_>>()
                .join(".");
            if dotted.is_empty() {
                continue;
            }
            overrides.push((dotted, parse_env_value(&raw)));
        }
    }
    overrides
}

fn parse_env_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if let Ok(b) = trimmed.parse::<bool>() {
        return Value::Bool(b);
    }
    if let Ok(n) = trimmed.parse::<u64>() {
        return Value::Number(n.into());
    }
    Value::String(trimmed.to_string())
}

/// Flatten nested mappings into dotted leaf paths. Scalars and nulls are
/// leaves; arrays are rejected later by `apply_override`.
fn flatten_value(value: Value, prefix: Option<String>) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map
            .into_iter()
            .flat_map(|(key, nested)| {
                let path = match &prefix {
                    Some(p) => format!("{p}.{key}"),
                    None => key,
                };
                flatten_value(nested, Some(path))
            })
            .collect(),
        other => match prefix {
            Some(path) => vec![(path, other)],
            None => Vec::new(),
        },
    }
}

fn apply_override(
    catalog: &mut AccessCatalog,
    dotted: &str,
    value: &Value,
) -> Result<(), PolicyError> {
    let segments: Vec<&str> = dotted.split('.').collect();
    match segments.as_slice() {
        ["plans", tier, "limits", limit_key] => {
            let tier = known_tier(tier, dotted)?;
            let cap = match value {
                Value::Null => None,
                Value::Number(n) => {
                    let cap = n.as_u64().and_then(|v| u32::try_from(v).ok()).ok_or_else(
                        || PolicyError::InvalidValue(format!("{dotted}: expected u32, got {n}")),
                    )?;
                    Some(cap)
                }
                other => {
                    return Err(PolicyError::InvalidValue(format!(
                        "{dotted}: expected integer or null, got {other}"
                    )))
                }
            };
            let spec = catalog.plans.entry(tier).or_default();
            spec.limits.insert(limit_key.to_string(), cap);
            debug!(path = dotted, ?cap, "applied limit override");
        }
        ["plans", tier, "features", feature_key] => {
            let tier = known_tier(tier, dotted)?;
            let enabled = value.as_bool().ok_or_else(|| {
                PolicyError::InvalidValue(format!("{dotted}: expected bool, got {value}"))
            })?;
            let spec = catalog.plans.entry(tier).or_default();
            if enabled {
                spec.features.insert(feature_key.to_string());
            } else {
                spec.features.remove(*feature_key);
            }
            debug!(path = dotted, enabled, "applied feature override");
        }
        ["feature_min_plan", feature_key] => {
            let raw = value.as_str().ok_or_else(|| {
                PolicyError::InvalidValue(format!("{dotted}: expected plan key, got {value}"))
            })?;
            let tier = known_tier(raw, dotted)?;
            catalog
                .feature_min_plan
                .insert(feature_key.to_string(), tier);
            debug!(path = dotted, tier = %tier, "applied min-plan override");
        }
        _ => return Err(PolicyError::UnsupportedPath(dotted.to_string())),
    }
    Ok(())
}

/// Tier lookup that rejects unknown keys instead of defaulting to basic:
/// a typo in an override file must fail loudly, not silently restrict.
fn known_tier(key: &str, dotted: &str) -> Result<PlanTier, PolicyError> {
    PlanTier::ALL
        .into_iter()
        .find(|tier| tier.key() == key)
        .ok_or_else(|| PolicyError::InvalidValue(format!("{dotted}: unknown plan tier '{key}'")))
}
