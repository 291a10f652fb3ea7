use agora_tenant::{
    AgoraEnv, InMemoryThemeSink, Tenant, TenantConfig, TenantContractFactory, TenantNamespace,
    TenantUIFactory,
    config::{ENV_TIER_VAR, INSTANCE_NAME_VAR, OVERRIDES_PATH_VAR},
    contracts::ContractRole,
    preview::DevTenantPreview,
    tenant,
    toggle::names,
    ui::DelegateStatus,
};
use alloy::primitives::address;
use proptest::prelude::*;
use serial_test::serial;
use std::{collections::HashMap, fs, sync::Arc};

struct ExpectedTenant {
    namespace: TenantNamespace,
    tier: AgoraEnv,
    chain_id: u64,
    symbol: &'static str,
    roles: &'static [ContractRole],
}

fn assert_tenant(tenant: &Tenant, expected: &ExpectedTenant) {
    assert_eq!(tenant.namespace, expected.namespace, "Namespace does not match");
    assert_eq!(tenant.tier, expected.tier, "Tier does not match");
    assert_eq!(
        tenant.contracts.chain().id(),
        expected.chain_id,
        "Chain id does not match"
    );
    assert_eq!(tenant.token.symbol, expected.symbol, "Token symbol does not match");
    for role in expected.roles {
        assert!(
            tenant.contracts.get(*role).is_some(),
            "Missing {role} binding for {}",
            expected.namespace
        );
    }
}

#[test]
fn resolves_every_tenant() {
    let expected = [
        ExpectedTenant {
            namespace: TenantNamespace::Optimism,
            tier: AgoraEnv::Prod,
            chain_id: 10,
            symbol: "OP",
            roles: &[
                ContractRole::Token,
                ContractRole::Governor,
                ContractRole::Alligator,
                ContractRole::ProposalTypesConfigurator,
            ],
        },
        ExpectedTenant {
            namespace: TenantNamespace::Optimism,
            tier: AgoraEnv::Dev,
            chain_id: 11_155_420,
            symbol: "OP",
            roles: &[ContractRole::Token, ContractRole::Governor],
        },
        ExpectedTenant {
            namespace: TenantNamespace::Ens,
            tier: AgoraEnv::Prod,
            chain_id: 1,
            symbol: "ENS",
            roles: &[ContractRole::Token, ContractRole::Governor, ContractRole::Timelock],
        },
        ExpectedTenant {
            namespace: TenantNamespace::Uniswap,
            tier: AgoraEnv::Prod,
            chain_id: 1,
            symbol: "UNI",
            roles: &[ContractRole::Token, ContractRole::Governor, ContractRole::Timelock],
        },
        ExpectedTenant {
            namespace: TenantNamespace::Scroll,
            tier: AgoraEnv::Dev,
            chain_id: 534_351,
            symbol: "SCR",
            roles: &[ContractRole::Token, ContractRole::Governor],
        },
        ExpectedTenant {
            namespace: TenantNamespace::Towns,
            tier: AgoraEnv::Prod,
            chain_id: 8453,
            symbol: "TOWNS",
            roles: &[ContractRole::Token, ContractRole::Governor],
        },
        ExpectedTenant {
            namespace: TenantNamespace::Syndicate,
            tier: AgoraEnv::Dev,
            chain_id: 11_155_111,
            symbol: "SYND",
            roles: &[ContractRole::Token, ContractRole::Governor],
        },
    ];

    for case in &expected {
        let tenant = Tenant::new(case.namespace, case.tier);
        assert_tenant(&tenant, case);
    }
}

#[test]
fn optimism_governor_is_never_swapped() {
    let prod = TenantContractFactory::create(TenantNamespace::Optimism, AgoraEnv::Prod);
    let dev = TenantContractFactory::create(TenantNamespace::Optimism, AgoraEnv::Dev);
    let production_governor = address!("cDF27F107725988f2261Ce2256bDfCdE8B382B10");

    assert_eq!(prod.governor.address, production_governor);
    assert_ne!(dev.governor.address, production_governor);
}

#[test]
fn overrides_file_is_applied_through_config() {
    let path = std::env::temp_dir().join(format!("agora-tenant-it-{}.yaml", std::process::id()));
    fs::write(
        &path,
        r##"
switches:
  delegates/endorsed-filter: false
customization:
  brand_primary: "#000000"
delegates:
  advanced:
    - "0x8888888888888888888888888888888888888888"
  retired:
    - "0x9999999999999999999999999999999999999999"
"##,
    )
    .unwrap();

    let vars: HashMap<&str, String> = HashMap::from([
        (INSTANCE_NAME_VAR, "optimism".to_string()),
        (ENV_TIER_VAR, "prod".to_string()),
        (OVERRIDES_PATH_VAR, path.to_string_lossy().into_owned()),
    ]);
    let config = TenantConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
    fs::remove_file(&path).unwrap();

    let tenant = Tenant::from_config(&config);
    assert!(tenant.ui.endorsed_filter().is_none());
    assert_eq!(tenant.ui.customization.brand_primary.to_string(), "0, 0, 0");
    assert_eq!(
        tenant.ui.delegate_status(&address!("8888888888888888888888888888888888888888")),
        DelegateStatus::Advanced
    );
    assert_eq!(
        tenant.ui.delegate_status(&address!("9999999999999999999999999999999999999999")),
        DelegateStatus::Retired
    );
    assert_eq!(
        tenant.ui.delegate_status(&address!("1234567890123456789012345678901234567890")),
        DelegateStatus::Allowed
    );
}

#[test]
#[serial]
fn preview_leaves_current_tenant_untouched() {
    tenant::reset();
    tenant::install(Arc::new(Tenant::new(TenantNamespace::Optimism, AgoraEnv::Prod)));
    let current = tenant::current().unwrap();
    let contracts_before = current.contracts.clone();
    let token_before = current.token.clone();

    let mut preview = DevTenantPreview::new(current.clone(), InMemoryThemeSink::new(), true).unwrap();
    preview.preview(TenantNamespace::Towns);
    preview.preview(TenantNamespace::Uniswap);

    let after = tenant::current().unwrap();
    assert_eq!(after.contracts, contracts_before);
    assert_eq!(after.token, token_before);
    assert_eq!(after.namespace, TenantNamespace::Optimism);
    assert_eq!(preview.ui().title, "Uniswap Agora");
    tenant::reset();
}

proptest! {
    #[test]
    fn toggle_lookup_is_pure(index in 0usize..6, name in "[a-z/-]{0,24}") {
        let namespace = TenantNamespace::ALL[index];
        let ui = TenantUIFactory::create(namespace);
        let first = ui.toggle(&name).cloned();
        let second = ui.toggle(&name).cloned();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(ui.is_enabled(&name), first.is_some_and(|t| t.enabled));
        prop_assert_eq!(&ui, &TenantUIFactory::create(namespace));
    }

    #[test]
    fn unknown_toggles_read_as_disabled(suffix in "[a-z]{1,12}") {
        let name = format!("unknown-{suffix}");
        for namespace in TenantNamespace::ALL {
            let ui = TenantUIFactory::create(namespace);
            prop_assert!(ui.toggle(&name).is_none());
            prop_assert!(!ui.is_enabled(&name));
        }
    }
}

#[test]
fn proposals_toggle_is_on_everywhere() {
    for namespace in TenantNamespace::ALL {
        assert!(TenantUIFactory::create(namespace).is_enabled(names::PROPOSALS));
    }
}
