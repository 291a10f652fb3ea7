use super::{community_links, core_toggles, governance_pages};
use crate::{
    abi::ContractAbi,
    chain::TenantChain,
    contracts::{ContractRole, DelegationModel, GovernorType, TenantContracts},
    namespace::AgoraEnv,
    theme::{Customization, RgbColor},
    toggle::{ProposalLifecycleConfig, ProposalStage, ProposalType, TenantToggle, ToggleConfig, names},
    token::TenantToken,
    ui::{DelegateLists, TenantUI},
};
use alloy::primitives::{Address, address};

const PROD_TOKEN: Address = address!("d29687c813D741E2F938F4aC377128810E217b1b");
const PROD_GOVERNOR: Address = address!("2f3f2054776bd3c2fc30d750734a8f539bb214f0");
const PROD_TIMELOCK: Address = address!("79D83D1518e2eAA64cdc0631df01b06e2762CC14");

/// Placeholder: the Scroll Sepolia token is not published.
const DEV_TOKEN: Address = ContractRole::Token.placeholder();
/// Placeholder: the Scroll Sepolia governor is not published.
const DEV_GOVERNOR: Address = ContractRole::Governor.placeholder();

fn deployment(tier: AgoraEnv) -> (TenantChain, Address, Address) {
    if tier.is_prod() {
        (TenantChain::Scroll, PROD_TOKEN, PROD_GOVERNOR)
    } else {
        (TenantChain::ScrollSepolia, DEV_TOKEN, DEV_GOVERNOR)
    }
}

pub fn contracts(tier: AgoraEnv) -> TenantContracts {
    let (chain, token, governor) = deployment(tier);
    let contracts = TenantContracts::new(
        chain,
        (token, ContractAbi::PartialVotesToken),
        (governor, ContractAbi::AgoraGovernor),
        GovernorType::Agora,
    )
    .with_delegation_model(DelegationModel::Partial);
    if tier.is_prod() {
        contracts.with_timelock(PROD_TIMELOCK)
    } else {
        contracts
    }
}

pub fn token(tier: AgoraEnv) -> TenantToken {
    let (chain, address, ..) = deployment(tier);
    TenantToken::new("Scroll", "SCR", 18, address, chain)
}

pub fn ui() -> TenantUI {
    let mut toggles = core_toggles();
    toggles.push(TenantToggle::with_config(
        names::PROPOSAL_LIFECYCLE,
        ToggleConfig::ProposalLifecycle(ProposalLifecycleConfig {
            stages: vec![
                ProposalStage::TempCheck,
                ProposalStage::Draft,
                ProposalStage::Submitted,
            ],
            proposal_types: vec![ProposalType::Basic, ProposalType::Social],
            gas_relay_enabled: true,
        }),
    ));

    TenantUI {
        title: "Scroll Agora".to_string(),
        organization: "Scroll DAO".to_string(),
        logo: "/images/scroll.svg".to_string(),
        hide_agora_branding: false,
        pages: governance_pages("Scroll"),
        links: community_links("https://discord.gg/scroll", "https://forum.scroll.io"),
        toggles,
        customization: Customization {
            primary: RgbColor(16, 16, 16),
            wash: RgbColor(255, 248, 243),
            brand_primary: RgbColor(255, 104, 74),
            font: Some("TransSansPremium".to_string()),
            ..Customization::default()
        },
        delegates: DelegateLists::default(),
    }
}
