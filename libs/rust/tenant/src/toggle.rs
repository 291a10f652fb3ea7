use crate::error::{Result, TenantError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod names {
    pub const PROPOSALS: &str = "proposals";
    pub const DELEGATES: &str = "delegates";
    pub const INFO: &str = "info";
    pub const DELEGATES_EDIT: &str = "delegates/edit";
    pub const PROPOSAL_LIFECYCLE: &str = "proposal-lifecycle";
    pub const ENDORSED_FILTER: &str = "delegates/endorsed-filter";
    pub const INFO_BANNER: &str = "info-banner";
    pub const STAKING: &str = "staking";
}

/// A named feature flag. An absent toggle and a disabled one mean the same
/// thing: the feature is off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantToggle {
    pub name: String,
    pub enabled: bool,
    #[serde(default)]
    pub config: ToggleConfig,
}

impl TenantToggle {
    pub fn on(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            config: ToggleConfig::None,
        }
    }

    pub fn off(name: &str) -> Self {
        Self {
            enabled: false,
            ..Self::on(name)
        }
    }

    pub fn with_config(name: &str, config: ToggleConfig) -> Self {
        Self {
            config,
            ..Self::on(name)
        }
    }

    /// Known toggle names must carry their payload kind. A disabled toggle
    /// may drop its payload.
    pub fn validate(&self) -> Result<()> {
        let Some(expected) = expected_kind(&self.name) else {
            return Ok(());
        };
        let found = self.config.kind();
        if found == expected || (!self.enabled && self.config == ToggleConfig::None) {
            return Ok(());
        }
        Err(TenantError::ToggleShapeMismatch {
            name: self.name.clone(),
            expected,
            found,
        })
    }
}

fn expected_kind(name: &str) -> Option<&'static str> {
    match name {
        names::PROPOSALS | names::DELEGATES | names::INFO | names::DELEGATES_EDIT => Some("none"),
        names::PROPOSAL_LIFECYCLE => Some("proposal_lifecycle"),
        names::ENDORSED_FILTER => Some("endorsed_filter"),
        names::INFO_BANNER => Some("info_banner"),
        names::STAKING => Some("staking"),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToggleConfig {
    #[default]
    None,
    ProposalLifecycle(ProposalLifecycleConfig),
    EndorsedFilter(EndorsedFilterConfig),
    InfoBanner(InfoBannerConfig),
    Staking(StakingConfig),
}

impl ToggleConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            ToggleConfig::None => "none",
            ToggleConfig::ProposalLifecycle(_) => "proposal_lifecycle",
            ToggleConfig::EndorsedFilter(_) => "endorsed_filter",
            ToggleConfig::InfoBanner(_) => "info_banner",
            ToggleConfig::Staking(_) => "staking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStage {
    TempCheck,
    Draft,
    GithubPr,
    AwaitingSponsorship,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalType {
    Basic,
    Social,
    Approval,
    Optimistic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalLifecycleConfig {
    /// Stages a draft walks through, in order.
    pub stages: Vec<ProposalStage>,
    pub proposal_types: Vec<ProposalType>,
    #[serde(default)]
    pub gas_relay_enabled: bool,
}

impl ProposalLifecycleConfig {
    pub fn first_stage(&self) -> Option<ProposalStage> {
        self.stages.first().copied()
    }

    pub fn next_stage(&self, current: ProposalStage) -> Option<ProposalStage> {
        let index = self.stages.iter().position(|stage| *stage == current)?;
        self.stages.get(index + 1).copied()
    }

    pub fn supports(&self, proposal_type: ProposalType) -> bool {
        self.proposal_types.contains(&proposal_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsedFilterConfig {
    /// Whether the delegates list starts filtered to endorsed delegates.
    pub default_filter: bool,
    pub label: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoBannerConfig {
    pub title: String,
    #[serde(default)]
    pub short_title: Option<String>,
    pub description: String,
    pub link: String,
    /// Key under which a dismissal is remembered client side.
    pub storage_key: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl InfoBannerConfig {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingConfig {
    pub max_deposits_per_account: u32,
    #[serde(default)]
    pub faq_link: Option<String>,
}
