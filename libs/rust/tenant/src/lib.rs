//! Tenant resolution for the multi-DAO governance app: which DAO is active,
//! its contracts and token per deployment tier, and its UI bundle.

pub mod abi;
pub mod chain;
pub mod config;
pub mod contracts;
pub mod delegation;
pub mod error;
pub mod namespace;
pub mod overrides;
pub mod preview;
pub mod tenant;
pub mod theme;
pub mod toggle;
pub mod token;
pub mod ui;

mod tenants;

pub use chain::TenantChain;
pub use config::TenantConfig;
pub use contracts::{ContractBinding, ContractRole, TenantContractFactory, TenantContracts};
pub use error::{Result, TenantError};
pub use namespace::{AgoraEnv, TenantNamespace, TenantSlug};
pub use preview::DevTenantPreview;
pub use tenant::Tenant;
pub use theme::{InMemoryThemeSink, ThemeSink, ThemeVariables};
pub use toggle::{TenantToggle, ToggleConfig};
pub use token::{TenantToken, TenantTokenFactory};
pub use ui::{TenantUI, TenantUIFactory};
