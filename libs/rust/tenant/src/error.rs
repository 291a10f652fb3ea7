use crate::delegation::DelegationError;

#[derive(Debug, thiserror::Error)]
pub enum TenantError {
    #[error("unsupported namespace: {0}")]
    UnsupportedNamespace(String),

    #[error("invalid environment tier: {0}")]
    InvalidEnvironment(String),

    #[error("{0} not set!")]
    MissingEnv(&'static str),

    #[error("invalid RPC url for {chain}: {url}")]
    InvalidRpcUrl { chain: &'static str, url: String },

    #[error("toggle {name} expects a {expected} payload, got {found}")]
    ToggleShapeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid colour token: {0}")]
    InvalidColor(String),

    #[error("dev tenant preview is disabled")]
    PreviewDisabled,

    #[error("delegation model of {0} does not support partial delegation")]
    PartialDelegationUnsupported(&'static str),

    #[error(transparent)]
    Delegation(#[from] DelegationError),
}

pub type Result<T, E = TenantError> = std::result::Result<T, E>;
