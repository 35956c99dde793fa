use super::attributes::AttributeBag;
use super::gateway::GatewayKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-gateway defaults applied to every payment routed through that gateway.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct GatewaySettings {
    pub gateway: GatewayKind,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub endpoint_url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub return_url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub notify_url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub submit_method: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub merchant_key: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub private_key: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub public_key: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

impl GatewaySettings {
    pub fn new(gateway: GatewayKind) -> Self {
        Self {
            gateway,
            endpoint_url: None,
            return_url: None,
            notify_url: None,
            submit_method: None,
            merchant_key: None,
            private_key: None,
            public_key: None,
        }
    }

    /// Renders the populated settings as attributes under their canonical names.
    pub fn attributes(&self) -> AttributeBag {
        [
            ("endpoint_url", &self.endpoint_url),
            ("return_url", &self.return_url),
            ("notify_url", &self.notify_url),
            ("submit_method", &self.submit_method),
            ("merchant_key", &self.merchant_key),
            ("private_key", &self.private_key),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|v| (name.to_string(), Value::String(v.clone())))
        })
        .collect()
    }
}
