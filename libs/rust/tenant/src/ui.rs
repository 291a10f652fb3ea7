use crate::{
    namespace::TenantNamespace,
    tenants,
    theme::Customization,
    toggle::{
        EndorsedFilterConfig, InfoBannerConfig, ProposalLifecycleConfig, StakingConfig,
        TenantToggle, ToggleConfig, names,
    },
};
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageRoute {
    Info,
    Delegates,
    Proposals,
    Staking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantPage {
    pub route: PageRoute,
    pub title: String,
    pub description: String,
    pub meta_title: String,
    pub meta_description: String,
}

impl TenantPage {
    pub fn new(route: PageRoute, title: &str, description: &str) -> Self {
        Self {
            route,
            title: title.to_string(),
            description: description.to_string(),
            meta_title: title.to_string(),
            meta_description: description.to_string(),
        }
    }

    pub fn with_meta(mut self, title: &str, description: &str) -> Self {
        self.meta_title = title.to_string();
        self.meta_description = description.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantLink {
    pub name: String,
    pub title: String,
    pub url: String,
}

impl TenantLink {
    pub fn new(name: &str, title: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateLists {
    /// When non-empty, only these delegates are listed.
    pub allowed: Vec<Address>,
    pub advanced: Vec<Address>,
    pub retired: Vec<Address>,
}

impl DelegateLists {
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty() && self.advanced.is_empty() && self.retired.is_empty()
    }

    /// Appends addresses from `other` not already listed. Returns how many
    /// were added.
    pub fn merge(&mut self, other: &DelegateLists) -> usize {
        let mut added = 0;
        for (target, source) in [
            (&mut self.allowed, &other.allowed),
            (&mut self.advanced, &other.advanced),
            (&mut self.retired, &other.retired),
        ] {
            for address in source {
                if !target.contains(address) {
                    target.push(*address);
                    added += 1;
                }
            }
        }
        added
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegateStatus {
    Allowed,
    Advanced,
    Retired,
    Hidden,
}

/// Presentation bundle of a tenant: copy, pages, toggles, theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantUI {
    pub title: String,
    pub organization: String,
    pub logo: String,
    pub hide_agora_branding: bool,
    pub pages: Vec<TenantPage>,
    pub links: Vec<TenantLink>,
    pub toggles: Vec<TenantToggle>,
    pub customization: Customization,
    pub delegates: DelegateLists,
}

impl TenantUI {
    pub fn toggle(&self, name: &str) -> Option<&TenantToggle> {
        self.toggles.iter().find(|toggle| toggle.name == name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.toggle(name).is_some_and(|toggle| toggle.enabled)
    }

    fn enabled_config(&self, name: &str) -> Option<&ToggleConfig> {
        self.toggle(name)
            .filter(|toggle| toggle.enabled)
            .map(|toggle| &toggle.config)
    }

    pub fn proposal_lifecycle(&self) -> Option<&ProposalLifecycleConfig> {
        match self.enabled_config(names::PROPOSAL_LIFECYCLE)? {
            ToggleConfig::ProposalLifecycle(config) => Some(config),
            _ => None,
        }
    }

    pub fn endorsed_filter(&self) -> Option<&EndorsedFilterConfig> {
        match self.enabled_config(names::ENDORSED_FILTER)? {
            ToggleConfig::EndorsedFilter(config) => Some(config),
            _ => None,
        }
    }

    pub fn info_banner(&self) -> Option<&InfoBannerConfig> {
        match self.enabled_config(names::INFO_BANNER)? {
            ToggleConfig::InfoBanner(config) => Some(config),
            _ => None,
        }
    }

    pub fn staking(&self) -> Option<&StakingConfig> {
        match self.enabled_config(names::STAKING)? {
            ToggleConfig::Staking(config) => Some(config),
            _ => None,
        }
    }

    pub fn page(&self, route: PageRoute) -> Option<&TenantPage> {
        self.pages.iter().find(|page| page.route == route)
    }

    pub fn link(&self, name: &str) -> Option<&TenantLink> {
        self.links.iter().find(|link| link.name == name)
    }

    pub fn delegate_status(&self, delegate: &Address) -> DelegateStatus {
        if self.delegates.retired.contains(delegate) {
            DelegateStatus::Retired
        } else if self.delegates.advanced.contains(delegate) {
            DelegateStatus::Advanced
        } else if self.delegates.allowed.is_empty() || self.delegates.allowed.contains(delegate) {
            DelegateStatus::Allowed
        } else {
            DelegateStatus::Hidden
        }
    }

    /// Replaces the toggle with the same name, or appends it.
    pub fn upsert_toggle(&mut self, toggle: TenantToggle) {
        match self.toggles.iter_mut().find(|t| t.name == toggle.name) {
            Some(existing) => *existing = toggle,
            None => self.toggles.push(toggle),
        }
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) {
        match self.toggles.iter_mut().find(|t| t.name == name) {
            Some(existing) => existing.enabled = enabled,
            None => self.toggles.push(TenantToggle {
                enabled,
                ..TenantToggle::on(name)
            }),
        }
    }
}

pub struct TenantUIFactory;

impl TenantUIFactory {
    pub fn create(namespace: TenantNamespace) -> TenantUI {
        match namespace {
            TenantNamespace::Optimism => tenants::optimism::ui(),
            TenantNamespace::Ens => tenants::ens::ui(),
            TenantNamespace::Uniswap => tenants::uniswap::ui(),
            TenantNamespace::Scroll => tenants::scroll::ui(),
            TenantNamespace::Towns => tenants::towns::ui(),
            TenantNamespace::Syndicate => tenants::syndicate::ui(),
        }
    }
}
