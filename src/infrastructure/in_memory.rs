use crate::domain::gateway::GatewayKind;
use crate::domain::ports::GatewaySettingsStore;
use crate::domain::settings::GatewaySettings;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for gateway settings.
///
/// Uses `Arc<RwLock<HashMap<GatewayKind, GatewaySettings>>>` so clones share
/// the same settings. Storing settings for a gateway replaces any previous entry.
#[derive(Default, Clone)]
pub struct InMemoryGatewaySettingsStore {
    settings: Arc<RwLock<HashMap<GatewayKind, GatewaySettings>>>,
}

impl InMemoryGatewaySettingsStore {
    /// Creates a new, empty in-memory settings store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GatewaySettingsStore for InMemoryGatewaySettingsStore {
    async fn store(&self, settings: GatewaySettings) -> Result<()> {
        let mut all = self.settings.write().await;
        all.insert(settings.gateway, settings);
        Ok(())
    }

    async fn get(&self, gateway: GatewayKind) -> Result<Option<GatewaySettings>> {
        let all = self.settings.read().await;
        Ok(all.get(&gateway).cloned())
    }
}
