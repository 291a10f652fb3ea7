use alloy::sol;
use serde::{Deserialize, Serialize};

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IVotesToken {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function getVotes(address account) external view returns (uint256);
        function delegates(address account) external view returns (address);
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IGovernor {
        function quorum(uint256 timepoint) external view returns (uint256);
        function votingDelay() external view returns (uint256);
        function votingPeriod() external view returns (uint256);
        function proposalThreshold() external view returns (uint256);
        function state(uint256 proposalId) external view returns (uint8);
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ITimelock {
        function getMinDelay() external view returns (uint256);
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IAlligator {
        function proxyAddress(address proxyOwner) external view returns (address);
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IStaker {
        function depositorTotalStaked(address depositor) external view returns (uint256);
    }
}

/// ABI a contract binding speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractAbi {
    VotesToken,
    PartialVotesToken,
    AgoraGovernor,
    BravoGovernor,
    OzGovernor,
    Timelock,
    Alligator,
    ProposalTypesConfigurator,
    Staker,
}

impl ContractAbi {
    pub fn is_token(&self) -> bool {
        matches!(self, ContractAbi::VotesToken | ContractAbi::PartialVotesToken)
    }

    pub fn is_governor(&self) -> bool {
        matches!(
            self,
            ContractAbi::AgoraGovernor | ContractAbi::BravoGovernor | ContractAbi::OzGovernor
        )
    }
}
