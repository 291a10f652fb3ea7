use crate::error::{Result, TenantError};
use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Networks tenant contracts are deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantChain {
    Mainnet,
    Sepolia,
    Optimism,
    OptimismSepolia,
    Scroll,
    ScrollSepolia,
    Base,
    BaseSepolia,
}

// (chain, id, display name, rpc env var, public endpoint)
const CHAIN_TABLE: &[(TenantChain, u64, &str, &str, &str)] = &[
    (
        TenantChain::Mainnet,
        1,
        "Ethereum",
        "ETHEREUM_NODE_URL",
        "https://eth.llamarpc.com",
    ),
    (
        TenantChain::Sepolia,
        11_155_111,
        "Sepolia",
        "SEPOLIA_NODE_URL",
        "https://ethereum-sepolia-rpc.publicnode.com",
    ),
    (
        TenantChain::Optimism,
        10,
        "OP Mainnet",
        "OPTIMISM_NODE_URL",
        "https://optimism.llamarpc.com",
    ),
    (
        TenantChain::OptimismSepolia,
        11_155_420,
        "OP Sepolia",
        "OPTIMISM_SEPOLIA_NODE_URL",
        "https://sepolia.optimism.io",
    ),
    (
        TenantChain::Scroll,
        534_352,
        "Scroll",
        "SCROLL_NODE_URL",
        "https://rpc.scroll.io",
    ),
    (
        TenantChain::ScrollSepolia,
        534_351,
        "Scroll Sepolia",
        "SCROLL_SEPOLIA_NODE_URL",
        "https://sepolia-rpc.scroll.io",
    ),
    (
        TenantChain::Base,
        8453,
        "Base",
        "BASE_NODE_URL",
        "https://base.llamarpc.com",
    ),
    (
        TenantChain::BaseSepolia,
        84_532,
        "Base Sepolia",
        "BASE_SEPOLIA_NODE_URL",
        "https://sepolia.base.org",
    ),
];

impl TenantChain {
    fn entry(&self) -> &'static (TenantChain, u64, &'static str, &'static str, &'static str) {
        CHAIN_TABLE
            .iter()
            .find(|(chain, ..)| chain == self)
            .unwrap_or(&CHAIN_TABLE[0])
    }

    pub fn id(&self) -> u64 {
        self.entry().1
    }

    pub fn name(&self) -> &'static str {
        self.entry().2
    }

    pub fn rpc_env_var(&self) -> &'static str {
        self.entry().3
    }

    pub fn public_rpc(&self) -> &'static str {
        self.entry().4
    }

    pub fn is_testnet(&self) -> bool {
        matches!(
            self,
            TenantChain::Sepolia
                | TenantChain::OptimismSepolia
                | TenantChain::ScrollSepolia
                | TenantChain::BaseSepolia
        )
    }

    pub fn from_id(id: u64) -> Option<TenantChain> {
        CHAIN_TABLE
            .iter()
            .find(|(_, chain_id, ..)| *chain_id == id)
            .map(|(chain, ..)| *chain)
    }

    /// RPC endpoint from the chain's env var, falling back to the public one.
    pub fn rpc_url(&self) -> String {
        env::var(self.rpc_env_var()).unwrap_or_else(|_| self.public_rpc().to_string())
    }

    pub fn provider(&self) -> Result<DynProvider> {
        self.provider_at(&self.rpc_url())
    }

    /// Builds an HTTP provider. No request is sent until the provider is used.
    pub fn provider_at(&self, rpc_url: &str) -> Result<DynProvider> {
        let url: Url = rpc_url.parse().map_err(|_| TenantError::InvalidRpcUrl {
            chain: self.name(),
            url: rpc_url.to_string(),
        })?;
        debug!(chain = self.name(), chain_id = self.id(), "Creating provider");
        Ok(ProviderBuilder::new().connect_http(url).erased())
    }
}
