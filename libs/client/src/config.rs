//! Client configuration (env-driven).

use crate::{BearerToken, ClientError, Environment};

/// Default log level when `ARM_LOG_LEVEL` is unset.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings for talking to Resource Manager.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Target cloud.
    pub environment: Environment,

    /// Resource Manager base URI. Defaults to the environment's endpoint.
    pub resource_manager_endpoint: String,

    /// Subscription to scope requests to.
    pub subscription_id: Option<String>,

    /// Pre-acquired access token.
    pub access_token: Option<BearerToken>,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            resource_manager_endpoint: environment.resource_manager_endpoint().to_string(),
            subscription_id: None,
            access_token: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    ///
    /// Recognised keys: `ARM_ENVIRONMENT`, `ARM_RESOURCE_MANAGER_ENDPOINT`,
    /// `ARM_SUBSCRIPTION_ID`, `ARM_ACCESS_TOKEN`, `ARM_LOG_LEVEL`. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = get("ARM_ENVIRONMENT")
            .map(|name| Environment::from_name(&name))
            .transpose()?
            .unwrap_or_default();

        let resource_manager_endpoint = get("ARM_RESOURCE_MANAGER_ENDPOINT")
            .unwrap_or_else(|| environment.resource_manager_endpoint().to_string());

        let subscription_id = get("ARM_SUBSCRIPTION_ID").map(|id| id.trim().to_string());
        let access_token = get("ARM_ACCESS_TOKEN").map(BearerToken::new);
        let log_level = get("ARM_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            environment,
            resource_manager_endpoint,
            subscription_id,
            access_token,
            log_level,
        })
    }

    /// The subscription ID, or an error naming the variable to set.
    pub fn require_subscription_id(&self) -> Result<&str, ClientError> {
        self.subscription_id.as_deref().ok_or_else(|| {
            ClientError::Config("missing subscription id. Set ARM_SUBSCRIPTION_ID.".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.environment, Environment::Public);
        assert_eq!(config.resource_manager_endpoint, "https://management.azure.com");
        assert_eq!(config.log_level, "warn");
        assert!(config.require_subscription_id().is_err());
    }

    #[test]
    fn test_environment_and_override() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("ARM_ENVIRONMENT", "china"),
            ("ARM_SUBSCRIPTION_ID", " 00000000-0000-0000-0000-000000000000 "),
        ]))
        .unwrap();
        assert_eq!(
            config.resource_manager_endpoint,
            "https://management.chinacloudapi.cn"
        );
        assert_eq!(
            config.require_subscription_id().unwrap(),
            "00000000-0000-0000-0000-000000000000"
        );

        let config = ClientConfig::from_lookup(lookup_from(&[
            ("ARM_ENVIRONMENT", "china"),
            ("ARM_RESOURCE_MANAGER_ENDPOINT", "http://localhost:9000"),
        ]))
        .unwrap();
        assert_eq!(config.resource_manager_endpoint, "http://localhost:9000");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("ARM_ACCESS_TOKEN", "  ")])).unwrap();
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_unknown_environment() {
        let result = ClientConfig::from_lookup(lookup_from(&[("ARM_ENVIRONMENT", "mars")]));
        assert!(matches!(result, Err(ClientError::UnknownEnvironment(_))));
    }
}
