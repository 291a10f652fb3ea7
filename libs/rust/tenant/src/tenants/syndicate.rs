use super::{community_links, core_toggles, governance_pages};
use crate::{
    abi::ContractAbi,
    chain::TenantChain,
    contracts::{ContractRole, GovernorType, TenantContracts},
    namespace::AgoraEnv,
    theme::{Customization, RgbColor},
    toggle::{TenantToggle, names},
    token::TenantToken,
    ui::{DelegateLists, TenantUI},
};
use alloy::primitives::{Address, address};

const PROD_TOKEN: Address = address!("1bAB804803159aD84b8854581AA53AC72455614E");
/// Placeholder: the Syndicate governor is not published.
const PROD_GOVERNOR: Address = ContractRole::Governor.placeholder();

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
    TenantContracts::new(
        chain,
        (token, ContractAbi::VotesToken),
        (governor, ContractAbi::AgoraGovernor),
        GovernorType::Agora,
    )
}

pub fn token(tier: AgoraEnv) -> TenantToken {
    let (chain, address, ..) = deployment(tier);
    TenantToken::new("Syndicate", "SYND", 18, address, chain)
}

pub fn ui() -> TenantUI {
    let mut toggles = core_toggles();
    // Delegate statements are curated off-platform for now.
    toggles.retain(|toggle| toggle.name != names::DELEGATES_EDIT);
    toggles.push(TenantToggle::off(names::DELEGATES_EDIT));

    TenantUI {
        title: "Syndicate Agora".to_string(),
        organization: "Syndicate Collective".to_string(),
        logo: "/images/syndicate.svg".to_string(),
        hide_agora_branding: false,
        pages: governance_pages("Syndicate"),
        links: community_links("https://discord.gg/syndicate", "https://forum.syndicate.io"),
        toggles,
        customization: Customization {
            primary: RgbColor(250, 250, 250),
            neutral: RgbColor(10, 10, 10),
            wash: RgbColor(20, 20, 20),
            line: RgbColor(50, 50, 50),
            brand_primary: RgbColor(217, 255, 59),
            brand_secondary: RgbColor(10, 10, 10),
            ..Customization::default()
        },
        delegates: DelegateLists::default(),
    }
}
