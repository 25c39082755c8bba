//! Configuration loading and representation.
//!
//! Values come from environment variables. Unset variables fall back to
//! defaults; set-but-invalid variables are an error rather than silently
//! ignored.

use thiserror::Error;

use itemstock_inventory::DeltaPolicy;

/// Selects how `increment_quantity` treats non-positive deltas.
///
/// `increment` (default) or `allow-decrement`.
pub const DELTA_POLICY_VAR: &str = "ITEMSTOCK_DELTA_POLICY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unsupported value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryConfig {
    pub delta_policy: DeltaPolicy,
}

impl InventoryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let delta_policy = match lookup(DELTA_POLICY_VAR) {
            Some(raw) => parse_delta_policy(&raw)?,
            None => DeltaPolicy::default(),
        };
        Ok(Self { delta_policy })
    }
}

fn parse_delta_policy(raw: &str) -> Result<DeltaPolicy, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "increment" => Ok(DeltaPolicy::Increment),
        "allow-decrement" | "allow_decrement" => Ok(DeltaPolicy::AllowDecrement),
        _ => Err(ConfigError::InvalidValue {
            var: DELTA_POLICY_VAR,
            value: raw.to_string(),
        }),
    }
}
