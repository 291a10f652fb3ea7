use crate::{
    chain::TenantChain,
    namespace::{AgoraEnv, TenantNamespace},
    tenants,
};
use alloy::primitives::{Address, U256, utils::format_units};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantToken {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub address: Address,
    pub chain: TenantChain,
}

impl TenantToken {
    pub fn new(name: &str, symbol: &str, decimals: u8, address: Address, chain: TenantChain) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            address,
            chain,
        }
    }

    /// Renders a raw on-chain amount in whole tokens, e.g. `1.5 OP`.
    pub fn format_amount(&self, amount: U256) -> String {
        let value = format_units(amount, self.decimals).unwrap_or_else(|_| amount.to_string());
        let trimmed = if value.contains('.') {
            value.trim_end_matches('0').trim_end_matches('.')
        } else {
            value.as_str()
        };
        format!("{} {}", trimmed, self.symbol)
    }
}

pub struct TenantTokenFactory;

impl TenantTokenFactory {
    pub fn create(namespace: TenantNamespace, tier: AgoraEnv) -> TenantToken {
        match namespace {
            TenantNamespace::Optimism => tenants::optimism::token(tier),
            TenantNamespace::Ens => tenants::ens::token(tier),
            TenantNamespace::Uniswap => tenants::uniswap::token(tier),
            TenantNamespace::Scroll => tenants::scroll::token(tier),
            TenantNamespace::Towns => tenants::towns::token(tier),
            TenantNamespace::Syndicate => tenants::syndicate::token(tier),
        }
    }
}
