use crate::{
    abi::{ContractAbi, IAlligator, IGovernor, IStaker, ITimelock, IVotesToken},
    chain::TenantChain,
    namespace::{AgoraEnv, TenantNamespace},
    tenants,
};
use alloy::{primitives::Address, providers::DynProvider};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical role a contract plays for a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractRole {
    Token,
    Governor,
    Timelock,
    Alligator,
    ProposalTypesConfigurator,
    Staker,
}

impl ContractRole {
    /// Stand-in address for a role whose contract has not been published
    /// yet: `0x00..00f0` plus the role's index. Never a real deployment.
    pub const fn placeholder(self) -> Address {
        Address::with_last_byte(0xf0 + self as u8)
    }
}

impl fmt::Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContractRole::Token => "token",
            ContractRole::Governor => "governor",
            ContractRole::Timelock => "timelock",
            ContractRole::Alligator => "alligator",
            ContractRole::ProposalTypesConfigurator => "proposal_types_configurator",
            ContractRole::Staker => "staker",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractBinding {
    pub role: ContractRole,
    pub address: Address,
    pub abi: ContractAbi,
    pub chain: TenantChain,
}

impl ContractBinding {
    pub fn new(role: ContractRole, address: Address, abi: ContractAbi, chain: TenantChain) -> Self {
        Self {
            role,
            address,
            abi,
            chain,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain.id()
    }

    pub fn is_placeholder(&self) -> bool {
        self.address == self.role.placeholder()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernorType {
    Agora,
    Bravo,
    OpenZeppelin,
}

/// How token holders may split their voting power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegationModel {
    /// One delegatee receives all voting power.
    Full,
    /// The token contract splits voting power by fraction.
    Partial,
    /// Sub-delegation rules are enforced by an alligator proxy.
    Advanced,
}

/// Contract bindings of one tenant on one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContracts {
    pub token: ContractBinding,
    pub governor: ContractBinding,
    pub timelock: Option<ContractBinding>,
    pub alligator: Option<ContractBinding>,
    pub proposal_types_configurator: Option<ContractBinding>,
    pub staker: Option<ContractBinding>,
    pub treasury: Vec<Address>,
    pub governor_type: GovernorType,
    pub delegation_model: DelegationModel,
}

impl TenantContracts {
    pub fn new(
        chain: TenantChain,
        token: (Address, ContractAbi),
        governor: (Address, ContractAbi),
        governor_type: GovernorType,
    ) -> Self {
        Self {
            token: ContractBinding::new(ContractRole::Token, token.0, token.1, chain),
            governor: ContractBinding::new(ContractRole::Governor, governor.0, governor.1, chain),
            timelock: None,
            alligator: None,
            proposal_types_configurator: None,
            staker: None,
            treasury: Vec::new(),
            governor_type,
            delegation_model: DelegationModel::Full,
        }
    }

    pub fn with_timelock(mut self, address: Address) -> Self {
        self.timelock = Some(self.binding(ContractRole::Timelock, address, ContractAbi::Timelock));
        self
    }

    pub fn with_alligator(mut self, address: Address) -> Self {
        self.alligator = Some(self.binding(ContractRole::Alligator, address, ContractAbi::Alligator));
        self
    }

    pub fn with_proposal_types_configurator(mut self, address: Address) -> Self {
        self.proposal_types_configurator = Some(self.binding(
            ContractRole::ProposalTypesConfigurator,
            address,
            ContractAbi::ProposalTypesConfigurator,
        ));
        self
    }

    pub fn with_staker(mut self, address: Address) -> Self {
        self.staker = Some(self.binding(ContractRole::Staker, address, ContractAbi::Staker));
        self
    }

    pub fn with_treasury(mut self, treasury: impl IntoIterator<Item = Address>) -> Self {
        self.treasury.extend(treasury);
        self
    }

    pub fn with_delegation_model(mut self, model: DelegationModel) -> Self {
        self.delegation_model = model;
        self
    }

    fn binding(&self, role: ContractRole, address: Address, abi: ContractAbi) -> ContractBinding {
        ContractBinding::new(role, address, abi, self.chain())
    }

    pub fn chain(&self) -> TenantChain {
        self.governor.chain
    }

    pub fn get(&self, role: ContractRole) -> Option<&ContractBinding> {
        match role {
            ContractRole::Token => Some(&self.token),
            ContractRole::Governor => Some(&self.governor),
            ContractRole::Timelock => self.timelock.as_ref(),
            ContractRole::Alligator => self.alligator.as_ref(),
            ContractRole::ProposalTypesConfigurator => self.proposal_types_configurator.as_ref(),
            ContractRole::Staker => self.staker.as_ref(),
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = &ContractBinding> {
        [Some(&self.token), Some(&self.governor)]
            .into_iter()
            .chain([
                self.timelock.as_ref(),
                self.alligator.as_ref(),
                self.proposal_types_configurator.as_ref(),
                self.staker.as_ref(),
            ])
            .flatten()
    }

    /// Roles still bound to a placeholder address.
    pub fn placeholder_roles(&self) -> Vec<ContractRole> {
        self.bindings()
            .filter(|binding| binding.is_placeholder())
            .map(|binding| binding.role)
            .collect()
    }

    pub fn supports_partial_delegation(&self) -> bool {
        self.delegation_model == DelegationModel::Partial
    }

    pub fn token_instance(&self, provider: DynProvider) -> IVotesToken::IVotesTokenInstance<DynProvider> {
        IVotesToken::new(self.token.address, provider)
    }

    pub fn governor_instance(&self, provider: DynProvider) -> IGovernor::IGovernorInstance<DynProvider> {
        IGovernor::new(self.governor.address, provider)
    }

    pub fn timelock_instance(
        &self,
        provider: DynProvider,
    ) -> Option<ITimelock::ITimelockInstance<DynProvider>> {
        self.timelock
            .as_ref()
            .map(|binding| ITimelock::new(binding.address, provider))
    }

    pub fn alligator_instance(
        &self,
        provider: DynProvider,
    ) -> Option<IAlligator::IAlligatorInstance<DynProvider>> {
        self.alligator
            .as_ref()
            .map(|binding| IAlligator::new(binding.address, provider))
    }

    pub fn staker_instance(&self, provider: DynProvider) -> Option<IStaker::IStakerInstance<DynProvider>> {
        self.staker
            .as_ref()
            .map(|binding| IStaker::new(binding.address, provider))
    }
}

pub struct TenantContractFactory;

impl TenantContractFactory {
    pub fn create(namespace: TenantNamespace, tier: AgoraEnv) -> TenantContracts {
        match namespace {
            TenantNamespace::Optimism => tenants::optimism::contracts(tier),
            TenantNamespace::Ens => tenants::ens::contracts(tier),
            TenantNamespace::Uniswap => tenants::uniswap::contracts(tier),
            TenantNamespace::Scroll => tenants::scroll::contracts(tier),
            TenantNamespace::Towns => tenants::towns::contracts(tier),
            TenantNamespace::Syndicate => tenants::syndicate::contracts(tier),
        }
    }
}
