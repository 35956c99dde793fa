use super::gateway::GatewayKind;
use super::settings::GatewaySettings;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GatewaySettingsStore: Send + Sync {
    async fn store(&self, settings: GatewaySettings) -> Result<()>;
    async fn get(&self, gateway: GatewayKind) -> Result<Option<GatewaySettings>>;
}

pub type GatewaySettingsStoreBox = Box<dyn GatewaySettingsStore>;
