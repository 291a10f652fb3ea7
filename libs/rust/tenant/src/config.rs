use crate::{
    error::{Result, TenantError},
    namespace::{AgoraEnv, TenantNamespace},
    overrides::TenantOverrides,
};
use std::env;
use tracing::warn;

pub const INSTANCE_NAME_VAR: &str = "NEXT_PUBLIC_AGORA_INSTANCE_NAME";
pub const ENV_TIER_VAR: &str = "NEXT_PUBLIC_AGORA_ENV";
pub const DEV_TENANT_SWITCHER_VAR: &str = "NEXT_PUBLIC_AGORA_DEV_TENANT_SWITCHER";
pub const OVERRIDES_PATH_VAR: &str = "AGORA_TENANT_OVERRIDES";
pub const TOGGLE_OVERRIDES_VAR: &str = "AGORA_TOGGLE_OVERRIDES";
pub const DEFAULT_OVERRIDES_PATH: &str = "tenant.yaml";

/// Boot-time selection of the active tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantConfig {
    pub namespace: TenantNamespace,
    pub tier: AgoraEnv,
    pub dev_preview: bool,
    pub overrides: TenantOverrides,
}

impl TenantConfig {
    pub fn new(namespace: TenantNamespace, tier: AgoraEnv) -> Self {
        Self {
            namespace,
            tier,
            dev_preview: false,
            overrides: TenantOverrides::default(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup(INSTANCE_NAME_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(TenantError::MissingEnv(INSTANCE_NAME_VAR))?
            .parse::<TenantNamespace>()?;

        let tier = match lookup(ENV_TIER_VAR).filter(|value| !value.trim().is_empty()) {
            Some(value) => value.parse::<AgoraEnv>()?,
            None => {
                warn!("{} not set, defaulting to dev", ENV_TIER_VAR);
                AgoraEnv::Dev
            }
        };

        let dev_preview = lookup(DEV_TENANT_SWITCHER_VAR)
            .is_some_and(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1"));

        let mut overrides = match lookup(OVERRIDES_PATH_VAR) {
            Some(path) => TenantOverrides::load(&path, true),
            None => TenantOverrides::load(DEFAULT_OVERRIDES_PATH, false),
        };
        if let Some(value) = lookup(TOGGLE_OVERRIDES_VAR) {
            overrides.merge_switches_json(&value);
        }

        Ok(Self {
            namespace,
            tier,
            dev_preview,
            overrides,
        })
    }
}
