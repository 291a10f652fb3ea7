use super::{community_links, core_toggles, governance_pages};
use crate::{
    abi::ContractAbi,
    chain::TenantChain,
    contracts::{GovernorType, TenantContracts},
    namespace::AgoraEnv,
    theme::{Customization, RgbColor},
    toggle::{EndorsedFilterConfig, TenantToggle, ToggleConfig, names},
    token::TenantToken,
    ui::{DelegateLists, TenantUI},
};
use alloy::primitives::{Address, address};

const PROD_TOKEN: Address = address!("C18360217D8F7Ab5e7c516566761Ea12Ce7F9D72");
const PROD_GOVERNOR: Address = address!("323A76393544d5ecca80cd6ef2A560C6a395b7E3");
const PROD_TIMELOCK: Address = address!("FE89cc7aBB2C4183683ab71653C4cdc9B02D44b7");

const DEV_TOKEN: Address = address!("ca83e6932cf4F03cDd6238be0fFcF2fe97854f67");
const DEV_GOVERNOR: Address = address!("b65c031Ac61128AE791D42Ae43780f012E2F7f89");

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
        (governor, ContractAbi::OzGovernor),
        GovernorType::OpenZeppelin,
    );

    // The timelock holds the DAO treasury.
    if tier.is_prod() {
        contracts
            .with_timelock(PROD_TIMELOCK)
            .with_treasury([PROD_TIMELOCK])
    } else {
        contracts
    }
}

pub fn token(tier: AgoraEnv) -> TenantToken {
    let (chain, address, ..) = deployment(tier);
    TenantToken::new("Ethereum Name Service", "ENS", 18, address, chain)
}

pub fn ui() -> TenantUI {
    let mut toggles = core_toggles();
    toggles.push(TenantToggle::with_config(
        names::ENDORSED_FILTER,
        ToggleConfig::EndorsedFilter(EndorsedFilterConfig {
            default_filter: false,
            label: "Active delegates".to_string(),
            tooltip: "Delegates who voted in recent proposals".to_string(),
        }),
    ));

    TenantUI {
        title: "ENS Agora".to_string(),
        organization: "ENS DAO".to_string(),
        logo: "/images/ens.svg".to_string(),
        hide_agora_branding: false,
        pages: governance_pages("ENS"),
        links: community_links("https://chat.ens.domains", "https://discuss.ens.domains"),
        toggles,
        customization: Customization {
            brand_primary: RgbColor(82, 152, 255),
            ..Customization::default()
        },
        delegates: DelegateLists::default(),
    }
}
