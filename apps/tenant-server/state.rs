use agora_tenant::{DevTenantPreview, InMemoryThemeSink, Tenant};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use utils::errors::TENANT_PREVIEW_FAILED;

pub type SharedPreview = Arc<Mutex<DevTenantPreview<InMemoryThemeSink>>>;

#[derive(Clone)]
pub struct AppState {
    pub tenant: Arc<Tenant>,
    /// Present only when the dev tenant switcher is on.
    pub preview: Option<SharedPreview>,
}

impl AppState {
    pub fn new(tenant: Arc<Tenant>, dev_preview: bool) -> Result<Self> {
        let preview = if dev_preview {
            let preview = DevTenantPreview::new(tenant.clone(), InMemoryThemeSink::new(), true)
                .context(TENANT_PREVIEW_FAILED)?;
            Some(Arc::new(Mutex::new(preview)))
        } else {
            None
        };
        Ok(Self { tenant, preview })
    }
}
