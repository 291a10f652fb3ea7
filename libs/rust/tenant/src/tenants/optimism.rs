use super::{community_links, core_toggles, governance_pages};
use crate::{
    abi::ContractAbi,
    chain::TenantChain,
    contracts::{ContractRole, DelegationModel, GovernorType, TenantContracts},
    namespace::AgoraEnv,
    theme::{Customization, RgbColor},
    toggle::{
        EndorsedFilterConfig, ProposalLifecycleConfig, ProposalStage, ProposalType, TenantToggle,
        ToggleConfig, names,
    },
    token::TenantToken,
    ui::{DelegateLists, PageRoute, TenantLink, TenantPage, TenantUI},
};
use alloy::primitives::{Address, address};

const PROD_TOKEN: Address = address!("4200000000000000000000000000000000000042");
const PROD_GOVERNOR: Address = address!("cDF27F107725988f2261Ce2256bDfCdE8B382B10");
const PROD_ALLIGATOR: Address = address!("7f08F3095530B67CdF8466B7a923607944136Df0");
const PROD_PROPOSAL_TYPES: Address = address!("67ecA7B65Baf0342CE7fBf0AA15921524414C09f");
const PROD_TREASURY: Address = address!("2501c477D0A35545a387Aa4A3EEe4292A9a8B3F0");

/// OP is a predeploy at the same address on every OP Stack chain.
const DEV_TOKEN: Address = PROD_TOKEN;
/// Placeholder: the OP Sepolia governor is not published.
const DEV_GOVERNOR: Address = ContractRole::Governor.placeholder();

fn deployment(tier: AgoraEnv) -> (TenantChain, Address, Address) {
    if tier.is_prod() {
        (TenantChain::Optimism, PROD_TOKEN, PROD_GOVERNOR)
    } else {
        (TenantChain::OptimismSepolia, DEV_TOKEN, DEV_GOVERNOR)
    }
}

pub fn contracts(tier: AgoraEnv) -> TenantContracts {
    let (chain, token, governor) = deployment(tier);
    let contracts = TenantContracts::new(
        chain,
        (token, ContractAbi::VotesToken),
        (governor, ContractAbi::AgoraGovernor),
        GovernorType::Agora,
    )
    .with_delegation_model(DelegationModel::Advanced);

    if tier.is_prod() {
        contracts
            .with_alligator(PROD_ALLIGATOR)
            .with_proposal_types_configurator(PROD_PROPOSAL_TYPES)
            .with_treasury([PROD_TREASURY])
    } else {
        contracts
    }
}

pub fn token(tier: AgoraEnv) -> TenantToken {
    let (chain, address, ..) = deployment(tier);
    TenantToken::new("Optimism", "OP", 18, address, chain)
}

pub fn ui() -> TenantUI {
    let mut toggles = core_toggles();
    toggles.extend([
        TenantToggle::with_config(
            names::PROPOSAL_LIFECYCLE,
            ToggleConfig::ProposalLifecycle(ProposalLifecycleConfig {
                stages: vec![
                    ProposalStage::Draft,
                    ProposalStage::AwaitingSponsorship,
                    ProposalStage::Submitted,
                ],
                proposal_types: vec![
                    ProposalType::Basic,
                    ProposalType::Approval,
                    ProposalType::Optimistic,
                ],
                gas_relay_enabled: false,
            }),
        ),
        TenantToggle::with_config(
            names::ENDORSED_FILTER,
            ToggleConfig::EndorsedFilter(EndorsedFilterConfig {
                default_filter: true,
                label: "Endorsed delegates".to_string(),
                tooltip: "Delegates endorsed by the Token House code of conduct council".to_string(),
            }),
        ),
    ]);

    let mut pages = governance_pages("Optimism");
    if let Some(info) = pages.iter_mut().find(|page| page.route == PageRoute::Info) {
        *info = TenantPage::new(
            PageRoute::Info,
            "Optimism Collective",
            "The Token House and Citizens' House govern the Optimism Collective.",
        )
        .with_meta(
            "Optimism Agora",
            "Home of token house governance and RetroPGF",
        );
    }

    let mut links = community_links(
        "https://discord.gg/optimism",
        "https://gov.optimism.io",
    );
    links.push(TenantLink::new(
        "code-of-conduct",
        "Code of conduct",
        "https://gov.optimism.io/t/code-of-conduct/5751",
    ));

    TenantUI {
        title: "Optimism Agora".to_string(),
        organization: "Optimism Collective".to_string(),
        logo: "/images/optimism.svg".to_string(),
        hide_agora_branding: false,
        pages,
        links,
        toggles,
        customization: Customization {
            brand_primary: RgbColor(255, 4, 32),
            brand_secondary: RgbColor(255, 255, 255),
            ..Customization::default()
        },
        delegates: DelegateLists::default(),
    }
}
