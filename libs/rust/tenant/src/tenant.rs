use crate::{
    config::TenantConfig,
    contracts::{TenantContractFactory, TenantContracts},
    delegation::{self, Allocation, PartialDelegation},
    error::{Result, TenantError},
    namespace::{AgoraEnv, TenantNamespace, TenantSlug},
    token::{TenantToken, TenantTokenFactory},
    ui::{TenantUI, TenantUIFactory},
};
use alloy::primitives::U256;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// The active DAO: contracts, token and UI resolved for one namespace and
/// tier. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tenant {
    pub namespace: TenantNamespace,
    pub slug: TenantSlug,
    pub tier: AgoraEnv,
    pub contracts: TenantContracts,
    pub ui: TenantUI,
    pub token: TenantToken,
}

impl Tenant {
    pub fn new(namespace: TenantNamespace, tier: AgoraEnv) -> Self {
        Self {
            namespace,
            slug: namespace.slug(),
            tier,
            contracts: TenantContractFactory::create(namespace, tier),
            ui: TenantUIFactory::create(namespace),
            token: TenantTokenFactory::create(namespace, tier),
        }
    }

    pub fn from_config(config: &TenantConfig) -> Self {
        let mut tenant = Self::new(config.namespace, config.tier);
        config.overrides.apply(&mut tenant.ui);
        tenant
    }

    pub fn is_prod(&self) -> bool {
        self.tier.is_prod()
    }

    /// Splits `voting_power` across delegatees for tenants whose token
    /// supports partial delegation.
    pub fn allocate_partial_delegation(
        &self,
        voting_power: U256,
        delegations: impl IntoIterator<Item = PartialDelegation>,
    ) -> Result<Allocation> {
        if !self.contracts.supports_partial_delegation() {
            return Err(TenantError::PartialDelegationUnsupported(self.namespace.as_str()));
        }
        Ok(delegation::allocate(voting_power, delegations)?)
    }
}

static CURRENT: Lazy<RwLock<Option<Arc<Tenant>>>> = Lazy::new(|| RwLock::new(None));

fn resolve(config: &TenantConfig) -> Arc<Tenant> {
    let tenant = Arc::new(Tenant::from_config(config));
    info!(
        namespace = %tenant.namespace,
        slug = %tenant.slug,
        tier = %tenant.tier,
        chain_id = tenant.contracts.chain().id(),
        toggles = tenant.ui.toggles.len(),
        dev_preview = config.dev_preview,
        "Tenant loaded"
    );
    for role in tenant.contracts.placeholder_roles() {
        warn!(
            namespace = %tenant.namespace,
            role = %role,
            "Contract address not published, using placeholder"
        );
    }
    tenant
}

/// Builds the tenant from the environment and installs it as the process
/// tenant.
pub fn load() -> Result<Arc<Tenant>> {
    let config = TenantConfig::from_env()?;
    Ok(load_from(&config))
}

/// Builds the tenant from an already parsed config and installs it.
pub fn load_from(config: &TenantConfig) -> Arc<Tenant> {
    let tenant = resolve(config);
    install(tenant.clone());
    tenant
}

pub fn install(tenant: Arc<Tenant>) {
    let mut slot = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(tenant);
}

/// The process tenant, loaded from the environment on first use. Concurrent
/// first callers all receive the same instance.
pub fn current() -> Result<Arc<Tenant>> {
    let installed = CURRENT
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone();
    if let Some(tenant) = installed {
        return Ok(tenant);
    }

    let mut slot = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(tenant) = slot.as_ref() {
        return Ok(tenant.clone());
    }
    let tenant = resolve(&TenantConfig::from_env()?);
    *slot = Some(tenant.clone());
    Ok(tenant)
}

/// Clears the process tenant. Test harnesses call this between suites.
pub fn reset() {
    let mut slot = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ENV_TIER_VAR, INSTANCE_NAME_VAR, OVERRIDES_PATH_VAR, TOGGLE_OVERRIDES_VAR},
        toggle::names,
    };
    use alloy::primitives::address;
    use serial_test::serial;

    #[test]
    fn composes_factories() {
        let tenant = Tenant::new(TenantNamespace::Towns, AgoraEnv::Prod);
        assert_eq!(tenant.slug, TenantSlug::Towns);
        assert_eq!(tenant.token.symbol, "TOWNS");
        assert_eq!(tenant.token.address, tenant.contracts.token.address);
        assert!(tenant.ui.staking().is_some());
        assert!(tenant.is_prod());
    }

    #[test]
    fn config_overrides_reach_the_ui_only() {
        let mut config = TenantConfig::new(TenantNamespace::Optimism, AgoraEnv::Prod);
        config
            .overrides
            .switches
            .insert(names::PROPOSAL_LIFECYCLE.to_string(), false);

        let tenant = Tenant::from_config(&config);
        let plain = Tenant::new(TenantNamespace::Optimism, AgoraEnv::Prod);
        assert!(!tenant.ui.is_enabled(names::PROPOSAL_LIFECYCLE));
        assert_eq!(tenant.contracts, plain.contracts);
        assert_eq!(tenant.token, plain.token);
    }

    #[test]
    fn partial_delegation_requires_support() {
        let delegatee = address!("00000000000000000000000000000000000000d1");
        let delegations = [PartialDelegation::new(delegatee, 5_000)];

        let scroll = Tenant::new(TenantNamespace::Scroll, AgoraEnv::Prod);
        let allocation = scroll
            .allocate_partial_delegation(U256::from(100u64), delegations)
            .unwrap();
        assert_eq!(allocation.shares, vec![(delegatee, U256::from(50u64))]);

        let ens = Tenant::new(TenantNamespace::Ens, AgoraEnv::Prod);
        let err = ens
            .allocate_partial_delegation(U256::from(100u64), delegations)
            .unwrap_err();
        assert!(matches!(err, TenantError::PartialDelegationUnsupported("ens")));
    }

    #[test]
    #[serial]
    fn install_and_reset() {
        reset();
        let tenant = Arc::new(Tenant::new(TenantNamespace::Uniswap, AgoraEnv::Dev));
        install(tenant.clone());
        let current = current().unwrap();
        assert!(Arc::ptr_eq(&current, &tenant));

        reset();
        install(Arc::new(Tenant::new(TenantNamespace::Ens, AgoraEnv::Dev)));
        assert_eq!(super::current().unwrap().namespace, TenantNamespace::Ens);
        reset();
    }

    fn set_tenant_env(namespace: &str, tier: &str) {
        let overrides = std::env::temp_dir().join("agora-tenant-no-overrides.yaml");
        unsafe {
            std::env::set_var(INSTANCE_NAME_VAR, namespace);
            std::env::set_var(ENV_TIER_VAR, tier);
            std::env::set_var(OVERRIDES_PATH_VAR, overrides);
            std::env::remove_var(TOGGLE_OVERRIDES_VAR);
        }
    }

    fn clear_tenant_env() {
        unsafe {
            std::env::remove_var(INSTANCE_NAME_VAR);
            std::env::remove_var(ENV_TIER_VAR);
            std::env::remove_var(OVERRIDES_PATH_VAR);
        }
    }

    #[test]
    #[serial]
    fn current_loads_from_env_when_nothing_installed() {
        reset();
        set_tenant_env("uniswap", "prod");

        let tenant = current().unwrap();
        assert_eq!(tenant.namespace, TenantNamespace::Uniswap);
        assert_eq!(tenant.tier, AgoraEnv::Prod);
        assert!(Arc::ptr_eq(&tenant, &current().unwrap()));

        reset();
        clear_tenant_env();
        assert!(matches!(current(), Err(TenantError::MissingEnv(INSTANCE_NAME_VAR))));
    }

    #[test]
    #[serial]
    fn concurrent_first_loads_share_one_tenant() {
        reset();
        set_tenant_env("scroll", "dev");

        let handles: Vec<_> = (0..16).map(|_| std::thread::spawn(current)).collect();
        let tenants: Vec<Arc<Tenant>> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        let installed = current().unwrap();
        for tenant in &tenants {
            assert!(Arc::ptr_eq(tenant, &installed));
        }
        assert_eq!(installed.namespace, TenantNamespace::Scroll);

        reset();
        clear_tenant_env();
    }

    #[test]
    #[serial]
    fn load_from_installs_the_config_tenant() {
        reset();
        let config = TenantConfig::new(TenantNamespace::Syndicate, AgoraEnv::Dev);
        let tenant = load_from(&config);
        assert!(Arc::ptr_eq(&tenant, &current().unwrap()));
        reset();
    }
}
