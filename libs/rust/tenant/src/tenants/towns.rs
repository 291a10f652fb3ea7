use super::{community_links, core_toggles, governance_pages};
use crate::{
    abi::ContractAbi,
    chain::TenantChain,
    contracts::{ContractRole, GovernorType, TenantContracts},
    namespace::AgoraEnv,
    theme::{Customization, RgbColor},
    toggle::{StakingConfig, TenantToggle, ToggleConfig, names},
    token::TenantToken,
    ui::{DelegateLists, PageRoute, TenantPage, TenantUI},
};
use alloy::primitives::Address;

// Towns governance contracts are not published yet. Both tiers carry role
// placeholders and no staker binding until they are.
const PROD_TOKEN: Address = ContractRole::Token.placeholder();
const PROD_GOVERNOR: Address = ContractRole::Governor.placeholder();
const DEV_TOKEN: Address = ContractRole::Token.placeholder();
const DEV_GOVERNOR: Address = ContractRole::Governor.placeholder();

fn deployment(tier: AgoraEnv) -> (TenantChain, Address, Address) {
    if tier.is_prod() {
        (TenantChain::Base, PROD_TOKEN, PROD_GOVERNOR)
    } else {
        (TenantChain::BaseSepolia, DEV_TOKEN, DEV_GOVERNOR)
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
    TenantToken::new("Towns", "TOWNS", 18, address, chain)
}

pub fn ui() -> TenantUI {
    let mut toggles = core_toggles();
    toggles.push(TenantToggle::with_config(
        names::STAKING,
        ToggleConfig::Staking(StakingConfig {
            max_deposits_per_account: 10,
            faq_link: Some("https://docs.towns.com/towns-smart-contracts/staking".to_string()),
        }),
    ));

    let mut pages = governance_pages("Towns");
    pages.push(TenantPage::new(
        PageRoute::Staking,
        "Stake TOWNS",
        "Stake TOWNS to a delegate and support the Towns network.",
    ));

    TenantUI {
        title: "Towns Agora".to_string(),
        organization: "Towns Lodge".to_string(),
        logo: "/images/towns.svg".to_string(),
        hide_agora_branding: true,
        pages,
        links: community_links("https://discord.gg/towns", "https://forum.towns.com"),
        toggles,
        customization: Customization {
            primary: RgbColor(255, 255, 255),
            secondary: RgbColor(212, 212, 212),
            tertiary: RgbColor(163, 163, 163),
            neutral: RgbColor(23, 21, 31),
            wash: RgbColor(15, 13, 23),
            line: RgbColor(43, 40, 56),
            brand_primary: RgbColor(33, 226, 117),
            brand_secondary: RgbColor(23, 21, 31),
            ..Customization::default()
        },
        delegates: DelegateLists::default(),
    }
}
