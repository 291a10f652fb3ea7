use super::{community_links, core_toggles, governance_pages};
use crate::{
    abi::ContractAbi,
    chain::TenantChain,
    contracts::{ContractRole, GovernorType, TenantContracts},
    namespace::AgoraEnv,
    theme::{Customization, RgbColor},
    toggle::{InfoBannerConfig, TenantToggle, ToggleConfig, names},
    token::TenantToken,
    ui::{DelegateLists, TenantUI},
};
use alloy::primitives::{Address, address};

const PROD_TOKEN: Address = address!("1f9840a85d5aF5bf1D1762F925BDADdC4201F984");
const PROD_GOVERNOR: Address = address!("408ED6354d4973f66138C91495F2f2FCbd8724C3");
const PROD_TIMELOCK: Address = address!("1a9C8182C09F50C8318d769245beA52c32BE35BC");

/// Placeholder: no Sepolia deployment is published.
const DEV_TOKEN: Address = ContractRole::Token.placeholder();
/// Placeholder: no Sepolia deployment is published.
const DEV_GOVERNOR: Address = ContractRole::Governor.placeholder();

fn deployment(tier: AgoraEnv) -> (TenantChain, Address, Address) {
    if tier.is_prod() {
        (TenantChain::Mainnet, PROD_TOKEN, PROD_GOVERNOR)
    } else {
        (TenantChain::Sepolia, DEV_TOKEN, DEV_GOVERNOR)
    }
}

pub fn contracts(tier: AgoraEnv) -> TenantContracts {
    let (chain, token, governor) = deployment(tier);
    let contracts = TenantContracts::new(
        chain,
        (token, ContractAbi::VotesToken),
        (governor, ContractAbi::BravoGovernor),
        GovernorType::Bravo,
    );
    if tier.is_prod() {
        contracts.with_timelock(PROD_TIMELOCK)
    } else {
        contracts
    }
}

pub fn token(tier: AgoraEnv) -> TenantToken {
    let (chain, address, ..) = deployment(tier);
    TenantToken::new("Uniswap", "UNI", 18, address, chain)
}

pub fn ui() -> TenantUI {
    let mut toggles = core_toggles();
    toggles.push(TenantToggle::with_config(
        names::INFO_BANNER,
        ToggleConfig::InfoBanner(InfoBannerConfig {
            title: "Uniswap governance process".to_string(),
            short_title: Some("Governance process".to_string()),
            description: "Learn how proposals move from temperature check to on-chain vote."
                .to_string(),
            link: "https://gov.uniswap.org/t/community-governance-process-update-jan-2023/19976"
                .to_string(),
            storage_key: "uniswap-process-banner".to_string(),
            expires_at: None,
        }),
    ));

    TenantUI {
        title: "Uniswap Agora".to_string(),
        organization: "Uniswap Foundation".to_string(),
        logo: "/images/uniswap.svg".to_string(),
        hide_agora_branding: false,
        pages: governance_pages("Uniswap"),
        links: community_links("https://discord.gg/uniswap", "https://gov.uniswap.org"),
        toggles,
        customization: Customization {
            brand_primary: RgbColor(255, 0, 122),
            ..Customization::default()
        },
        delegates: DelegateLists::default(),
    }
}
