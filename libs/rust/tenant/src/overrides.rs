use crate::{
    theme::CustomizationOverride,
    toggle::TenantToggle,
    ui::{DelegateLists, TenantUI},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, io::ErrorKind};
use tracing::{debug, info, warn};

/// Deployment-specific adjustments layered onto a tenant's static UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantOverrides {
    /// Upserted by name.
    pub toggles: Vec<TenantToggle>,
    /// Flips `enabled` without touching the payload.
    pub switches: BTreeMap<String, bool>,
    pub customization: CustomizationOverride,
    /// Appended to the tenant's delegate lists.
    pub delegates: DelegateLists,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedOverrides {
    pub upserted: usize,
    pub skipped: usize,
    pub switched: usize,
    pub delegates: usize,
}

impl TenantOverrides {
    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
            && self.switches.is_empty()
            && self.customization.is_empty()
            && self.delegates.is_empty()
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    /// Reads overrides from `path`. A missing or malformed file yields no
    /// overrides.
    pub fn load(path: &str, explicit: bool) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_yaml(&contents) {
                Ok(overrides) => overrides,
                Err(err) => {
                    warn!(error = %err, path = %path, "Failed to parse tenant overrides, ignoring");
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
                debug!(path = %path, "No tenant overrides file");
                Self::default()
            }
            Err(err) => {
                warn!(error = %err, path = %path, "Tenant overrides not readable, ignoring");
                Self::default()
            }
        }
    }

    /// Merges a JSON map of toggle name to enabled flag into the switches.
    pub fn merge_switches_json(&mut self, value: &str) {
        match serde_json::from_str::<BTreeMap<String, bool>>(value) {
            Ok(switches) => self.switches.extend(switches),
            Err(err) => {
                warn!(error = %err, "Failed to parse toggle overrides");
            }
        }
    }

    pub fn apply(&self, ui: &mut TenantUI) -> AppliedOverrides {
        let mut applied = AppliedOverrides::default();

        for toggle in &self.toggles {
            match toggle.validate() {
                Ok(()) => {
                    ui.upsert_toggle(toggle.clone());
                    applied.upserted += 1;
                }
                Err(err) => {
                    warn!(toggle = %toggle.name, error = %err, "Skipping toggle override");
                    applied.skipped += 1;
                }
            }
        }

        for (name, enabled) in &self.switches {
            ui.set_enabled(name, *enabled);
            applied.switched += 1;
        }

        self.customization.apply_to(&mut ui.customization);
        applied.delegates = ui.delegates.merge(&self.delegates);

        if applied != AppliedOverrides::default() {
            info!(
                upserted = applied.upserted,
                skipped = applied.skipped,
                switched = applied.switched,
                delegates = applied.delegates,
                "Applied tenant overrides"
            );
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        namespace::TenantNamespace,
        theme::RgbColor,
        toggle::{ToggleConfig, names},
        ui::{DelegateStatus, TenantUIFactory},
    };
    use alloy::primitives::address;

    const OVERRIDES: &str = r#"
toggles:
  - name: info-banner
    enabled: true
    config:
      kind: info_banner
      title: Delegate elections
      description: Nominations are open
      link: https://example.org/elections
      storage_key: elections-2025
  - name: staking
    enabled: true
switches:
  delegates/edit: false
customization:
  primary: "10, 20, 30"
delegates:
  retired:
    - "0x7777777777777777777777777777777777777777"
"#;

    #[test]
    fn parses_yaml() {
        let overrides = TenantOverrides::from_yaml(OVERRIDES).unwrap();
        assert_eq!(overrides.toggles.len(), 2);
        assert_eq!(overrides.switches.get(names::DELEGATES_EDIT), Some(&false));
        assert_eq!(overrides.customization.primary, Some(RgbColor(10, 20, 30)));
        assert!(!overrides.is_empty());
    }

    #[test]
    fn applies_valid_overrides_and_skips_mismatched() {
        let overrides = TenantOverrides::from_yaml(OVERRIDES).unwrap();
        let mut ui = TenantUIFactory::create(TenantNamespace::Ens);
        let applied = overrides.apply(&mut ui);

        assert_eq!(
            applied,
            AppliedOverrides {
                upserted: 1,
                skipped: 1,
                switched: 1,
                delegates: 1,
            }
        );
        assert_eq!(ui.info_banner().unwrap().title, "Delegate elections");
        assert!(ui.toggle(names::STAKING).is_none());
        assert!(!ui.is_enabled(names::DELEGATES_EDIT));
        assert_eq!(ui.customization.primary, RgbColor(10, 20, 30));
        assert_eq!(
            ui.delegate_status(&address!("7777777777777777777777777777777777777777")),
            DelegateStatus::Retired
        );
    }

    #[test]
    fn env_switches_add_missing_toggles() {
        let mut overrides = TenantOverrides::default();
        overrides.merge_switches_json(r#"{"forums": true, "proposals": false}"#);
        overrides.merge_switches_json("not json");

        let mut ui = TenantUIFactory::create(TenantNamespace::Uniswap);
        overrides.apply(&mut ui);
        assert!(ui.is_enabled("forums"));
        assert_eq!(ui.toggle("forums").unwrap().config, ToggleConfig::None);
        assert!(!ui.is_enabled(names::PROPOSALS));
    }

    #[test]
    fn missing_file_means_no_overrides() {
        let path = std::env::temp_dir().join("agora-tenant-does-not-exist.yaml");
        let overrides = TenantOverrides::load(path.to_str().unwrap(), false);
        assert!(overrides.is_empty());
    }

    #[test]
    fn malformed_file_is_ignored() {
        let path = std::env::temp_dir().join(format!("agora-tenant-bad-{}.yaml", std::process::id()));
        fs::write(&path, "toggles: {not: [a list").unwrap();
        let overrides = TenantOverrides::load(path.to_str().unwrap(), true);
        assert!(overrides.is_empty());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn non_ascii_hex_colour_is_ignored() {
        let path = std::env::temp_dir().join(format!("agora-tenant-colour-{}.yaml", std::process::id()));
        fs::write(&path, "customization:\n  primary: \"#a€12\"\n").unwrap();
        let overrides = TenantOverrides::load(path.to_str().unwrap(), true);
        assert!(overrides.is_empty());
        fs::remove_file(path).unwrap();
    }
}
