use crate::error::TenantError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One configured DAO instance served by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantNamespace {
    Optimism,
    Ens,
    Uniswap,
    Scroll,
    Towns,
    Syndicate,
}

impl TenantNamespace {
    pub const ALL: [TenantNamespace; 6] = [
        TenantNamespace::Optimism,
        TenantNamespace::Ens,
        TenantNamespace::Uniswap,
        TenantNamespace::Scroll,
        TenantNamespace::Towns,
        TenantNamespace::Syndicate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TenantNamespace::Optimism => "optimism",
            TenantNamespace::Ens => "ens",
            TenantNamespace::Uniswap => "uniswap",
            TenantNamespace::Scroll => "scroll",
            TenantNamespace::Towns => "towns",
            TenantNamespace::Syndicate => "syndicate",
        }
    }

    pub fn slug(&self) -> TenantSlug {
        match self {
            TenantNamespace::Optimism => TenantSlug::Op,
            TenantNamespace::Ens => TenantSlug::Ens,
            TenantNamespace::Uniswap => TenantSlug::Uni,
            TenantNamespace::Scroll => TenantSlug::Scr,
            TenantNamespace::Towns => TenantSlug::Towns,
            TenantNamespace::Syndicate => TenantSlug::Synd,
        }
    }
}

impl fmt::Display for TenantNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenantNamespace {
    type Err = TenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        TenantNamespace::ALL
            .into_iter()
            .find(|namespace| namespace.as_str() == normalized)
            .ok_or_else(|| TenantError::UnsupportedNamespace(s.to_string()))
    }
}

/// Short identifier the data layer keys tenant records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TenantSlug {
    Op,
    Ens,
    Uni,
    Scr,
    Towns,
    Synd,
}

impl TenantSlug {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantSlug::Op => "OP",
            TenantSlug::Ens => "ENS",
            TenantSlug::Uni => "UNI",
            TenantSlug::Scr => "SCR",
            TenantSlug::Towns => "TOWNS",
            TenantSlug::Synd => "SYND",
        }
    }
}

impl fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment tier. Production reads mainnet deployments, everything else
/// reads the testnet ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgoraEnv {
    Prod,
    #[default]
    Dev,
}

impl AgoraEnv {
    pub fn is_prod(&self) -> bool {
        matches!(self, AgoraEnv::Prod)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgoraEnv::Prod => "prod",
            AgoraEnv::Dev => "dev",
        }
    }
}

impl fmt::Display for AgoraEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgoraEnv {
    type Err = TenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(AgoraEnv::Prod),
            "dev" | "development" | "staging" | "test" => Ok(AgoraEnv::Dev),
            _ => Err(TenantError::InvalidEnvironment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespaces_case_insensitively() {
        assert_eq!(
            "Optimism".parse::<TenantNamespace>().unwrap(),
            TenantNamespace::Optimism
        );
        assert_eq!(
            " ens ".parse::<TenantNamespace>().unwrap(),
            TenantNamespace::Ens
        );
        for namespace in TenantNamespace::ALL {
            assert_eq!(namespace.as_str().parse::<TenantNamespace>().unwrap(), namespace);
        }
    }

    #[test]
    fn rejects_unknown_namespace() {
        let err = "compound".parse::<TenantNamespace>().unwrap_err();
        assert!(matches!(err, TenantError::UnsupportedNamespace(ref s) if s == "compound"));
        assert_eq!(err.to_string(), "unsupported namespace: compound");
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = TenantNamespace::ALL.iter().map(|n| n.slug().as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), TenantNamespace::ALL.len());
    }

    #[test]
    fn parses_tiers() {
        assert_eq!("prod".parse::<AgoraEnv>().unwrap(), AgoraEnv::Prod);
        assert_eq!("PRODUCTION".parse::<AgoraEnv>().unwrap(), AgoraEnv::Prod);
        assert_eq!("staging".parse::<AgoraEnv>().unwrap(), AgoraEnv::Dev);
        assert!("mainnet".parse::<AgoraEnv>().is_err());
        assert_eq!(AgoraEnv::default(), AgoraEnv::Dev);
    }
}
