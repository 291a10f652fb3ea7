use crate::{
    error::{Result, TenantError},
    namespace::TenantNamespace,
    tenant::Tenant,
    theme::{ThemeSink, ThemeVariables},
    ui::{TenantUI, TenantUIFactory},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Development-only theme preview. Swaps the CSS variables written to the
/// sink for another tenant's; the data layer keeps using the base tenant.
pub struct DevTenantPreview<S: ThemeSink> {
    base: Arc<Tenant>,
    previewed: Option<(TenantNamespace, TenantUI)>,
    applied: ThemeVariables,
    sink: S,
}

impl<S: ThemeSink> DevTenantPreview<S> {
    /// Writes the base tenant's theme to the sink. Fails unless the dev
    /// preview flag is on.
    pub fn new(base: Arc<Tenant>, sink: S, enabled: bool) -> Result<Self> {
        if !enabled {
            return Err(TenantError::PreviewDisabled);
        }
        let mut preview = Self {
            base,
            previewed: None,
            applied: ThemeVariables::default(),
            sink,
        };
        let vars = ThemeVariables::from_customization(&preview.base.ui.customization);
        preview.write(vars);
        Ok(preview)
    }

    pub fn base(&self) -> &Arc<Tenant> {
        &self.base
    }

    pub fn previewed_namespace(&self) -> TenantNamespace {
        self.previewed
            .as_ref()
            .map_or(self.base.namespace, |(namespace, _)| *namespace)
    }

    pub fn ui(&self) -> &TenantUI {
        self.previewed
            .as_ref()
            .map_or(&self.base.ui, |(_, ui)| ui)
    }

    pub fn variables(&self) -> &ThemeVariables {
        &self.applied
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn preview(&mut self, namespace: TenantNamespace) -> &TenantUI {
        if namespace == self.base.namespace {
            self.reset();
            return self.ui();
        }

        let ui = TenantUIFactory::create(namespace);
        let vars = ThemeVariables::from_customization(&ui.customization);
        self.write(vars);
        self.previewed = Some((namespace, ui));
        info!(base = %self.base.namespace, previewed = %namespace, "Previewing tenant theme");
        self.ui()
    }

    pub fn reset(&mut self) {
        let vars = ThemeVariables::from_customization(&self.base.ui.customization);
        self.write(vars);
        self.previewed = None;
    }

    fn write(&mut self, next: ThemeVariables) {
        for stale in self.applied.stale_in(&next) {
            self.sink.remove_property(stale);
        }
        for (name, value) in next.iter() {
            self.sink.set_property(name, value);
        }
        debug!(properties = next.len(), "Theme variables written");
        self.applied = next;
    }
}
