use crate::state::AppState;
use agora_tenant::{
    AgoraEnv, ContractRole, TenantContracts, TenantNamespace, TenantSlug, TenantToken, TenantUI,
    ToggleConfig, ui::DelegateStatus,
};
use alloy::primitives::Address;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct TenantSummary {
    pub namespace: TenantNamespace,
    pub slug: TenantSlug,
    pub tier: AgoraEnv,
    pub chain_id: u64,
    pub token: TenantToken,
    pub contracts: TenantContracts,
    /// Roles whose contract address is not published yet.
    pub placeholder_roles: Vec<ContractRole>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DelegateStatusResponse {
    pub address: Address,
    pub status: DelegateStatus,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ToggleResponse {
    pub name: String,
    pub enabled: bool,
    pub config: Option<ToggleConfig>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tenant", get(tenant_summary))
        .route("/tenant/ui", get(tenant_ui))
        .route("/tenant/toggles/{*name}", get(toggle))
        .route("/tenant/delegates/{address}", get(delegate_status))
        .route("/dev/theme/{namespace}", get(dev_theme))
        .with_state(state)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn tenant_summary(State(state): State<AppState>) -> Json<TenantSummary> {
    let tenant = &state.tenant;
    Json(TenantSummary {
        namespace: tenant.namespace,
        slug: tenant.slug,
        tier: tenant.tier,
        chain_id: tenant.contracts.chain().id(),
        token: tenant.token.clone(),
        contracts: tenant.contracts.clone(),
        placeholder_roles: tenant.contracts.placeholder_roles(),
    })
}

pub async fn tenant_ui(State(state): State<AppState>) -> Json<TenantUI> {
    Json(state.tenant.ui.clone())
}

/// Absent toggles answer as disabled rather than 404.
pub async fn toggle(State(state): State<AppState>, Path(name): Path<String>) -> Json<ToggleResponse> {
    let response = match state.tenant.ui.toggle(&name) {
        Some(toggle) => ToggleResponse {
            name: toggle.name.clone(),
            enabled: toggle.enabled,
            config: Some(toggle.config.clone()),
        },
        None => {
            debug!(toggle = %name, "Toggle not configured, reporting disabled");
            ToggleResponse {
                name,
                enabled: false,
                config: None,
            }
        }
    };
    Json(response)
}

pub async fn delegate_status(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<DelegateStatusResponse>, ApiError> {
    let address: Address = address
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid address: {address}")))?;
    Ok(Json(DelegateStatusResponse {
        address,
        status: state.tenant.ui.delegate_status(&address),
    }))
}

pub async fn dev_theme(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
) -> Result<Response, ApiError> {
    let Some(preview) = state.preview.as_ref() else {
        return Err(ApiError::NotFound);
    };
    let namespace: TenantNamespace = namespace.parse().map_err(|e| {
        warn!(error = %e, "Rejected theme preview");
        ApiError::BadRequest(format!("{e}"))
    })?;

    let mut preview = preview.lock().await;
    preview.preview(namespace);
    let css = preview.sink().to_css();

    Ok(([(header::CONTENT_TYPE, "text/css")], css).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_tenant::{Tenant, toggle::names};
    use axum::body::to_bytes;
    use std::sync::Arc;

    fn state(namespace: TenantNamespace, dev_preview: bool) -> AppState {
        AppState::new(Arc::new(Tenant::new(namespace, AgoraEnv::Prod)), dev_preview).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "OK");
    }

    #[tokio::test]
    async fn summary_reports_active_tenant() {
        let Json(summary) = tenant_summary(State(state(TenantNamespace::Optimism, false))).await;
        assert_eq!(summary.namespace, TenantNamespace::Optimism);
        assert_eq!(summary.slug, TenantSlug::Op);
        assert_eq!(summary.chain_id, 10);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["namespace"], "optimism");
        assert_eq!(json["slug"], "OP");
        assert_eq!(json["token"]["symbol"], "OP");
        assert!(summary.placeholder_roles.is_empty());

        let Json(towns) = tenant_summary(State(state(TenantNamespace::Towns, false))).await;
        assert_eq!(
            towns.placeholder_roles,
            vec![ContractRole::Token, ContractRole::Governor]
        );
    }

    #[tokio::test]
    async fn delegate_status_reads_tenant_lists() {
        let Json(response) = delegate_status(
            State(state(TenantNamespace::Ens, false)),
            Path("0x1111111111111111111111111111111111111111".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(response.status, DelegateStatus::Allowed);

        let result = delegate_status(
            State(state(TenantNamespace::Ens, false)),
            Path("0x1234".to_string()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn missing_toggle_reports_disabled() {
        let Json(response) = toggle(
            State(state(TenantNamespace::Ens, false)),
            Path("no-such-feature".to_string()),
        )
        .await;
        assert_eq!(
            response,
            ToggleResponse {
                name: "no-such-feature".to_string(),
                enabled: false,
                config: None,
            }
        );
    }

    #[tokio::test]
    async fn nested_toggle_names_resolve() {
        let Json(response) = toggle(
            State(state(TenantNamespace::Optimism, false)),
            Path(names::ENDORSED_FILTER.to_string()),
        )
        .await;
        assert!(response.enabled);
        assert!(matches!(response.config, Some(ToggleConfig::EndorsedFilter(_))));
    }

    #[tokio::test]
    async fn theme_preview_requires_dev_flag() {
        let result = dev_theme(
            State(state(TenantNamespace::Scroll, false)),
            Path("optimism".to_string()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn theme_preview_rejects_unknown_namespace() {
        let result = dev_theme(
            State(state(TenantNamespace::Scroll, true)),
            Path("compound".to_string()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn theme_preview_renders_css_without_touching_tenant() {
        let state = state(TenantNamespace::Scroll, true);
        let response = dev_theme(State(state.clone()), Path("optimism".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let css = String::from_utf8(body.to_vec()).unwrap();
        assert!(css.contains("--brand-primary: 255, 4, 32;"));

        assert_eq!(state.tenant.namespace, TenantNamespace::Scroll);
        assert_eq!(
            state.tenant.contracts,
            Tenant::new(TenantNamespace::Scroll, AgoraEnv::Prod).contracts
        );
    }
}
