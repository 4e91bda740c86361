//! Azure cloud environments.

use std::fmt;
use std::str::FromStr;

use crate::ClientError;

/// A sovereign Azure cloud.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    #[default]
    Public,
    China,
    UsGovernment,
}

impl Environment {
    /// Resource Manager endpoint for this cloud.
    pub fn resource_manager_endpoint(&self) -> &'static str {
        match self {
            Environment::Public => "https://management.azure.com",
            Environment::China => "https://management.chinacloudapi.cn",
            Environment::UsGovernment => "https://management.usgovcloudapi.net",
        }
    }

    /// Parses an environment name. Both short (`public`) and SDK-style
    /// (`AzurePublicCloud`) names are accepted, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, ClientError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "public" | "azurepubliccloud" => Ok(Environment::Public),
            "china" | "azurechinacloud" => Ok(Environment::China),
            "usgovernment" | "azureusgovernmentcloud" => Ok(Environment::UsGovernment),
            _ => Err(ClientError::UnknownEnvironment(name.to_string())),
        }
    }
}

impl FromStr for Environment {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Public => "public",
            Environment::China => "china",
            Environment::UsGovernment => "usgovernment",
        };
        f.write_str(name)
    }
}
