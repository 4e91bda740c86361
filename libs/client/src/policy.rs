//! Policy definition lookups by display name.
//!
//! Display names are not unique in Azure Policy, so these lookups fail on
//! ambiguity instead of picking one.

use arm_id::{IdError, PolicyDefinitionId, PolicySetDefinitionId, SubscriptionId};
use arm_lookup::{find_by_display_name, DisplayNamed, LookupError};
use serde::{Deserialize, Serialize};

use crate::{ArmClient, ArmListing};

/// API version for `Microsoft.Authorization` policy endpoints.
pub const POLICY_API_VERSION: &str = "2021-06-01";

/// Properties shared by policy definitions and policy set definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: PolicyProperties,
}

impl PolicyDefinition {
    /// Parses `id` as a subscription-scoped definition.
    ///
    /// Built-in definitions live at tenant scope and fail to parse.
    pub fn parsed_id(&self) -> Result<PolicyDefinitionId, IdError> {
        PolicyDefinitionId::parse(&self.id)
    }
}

impl DisplayNamed for PolicyDefinition {
    fn display_name(&self) -> Option<&str> {
        self.properties.display_name.as_deref()
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySetDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: PolicyProperties,
}

impl PolicySetDefinition {
    /// Parses `id` as a subscription-scoped set definition.
    pub fn parsed_id(&self) -> Result<PolicySetDefinitionId, IdError> {
        PolicySetDefinitionId::parse(&self.id)
    }
}

impl DisplayNamed for PolicySetDefinition {
    fn display_name(&self) -> Option<&str> {
        self.properties.display_name.as_deref()
    }

    fn id(&self) -> &str {
        &self.id
    }
}

fn authorization_path(client: &ArmClient, collection: &str) -> String {
    format!(
        "{}/providers/Microsoft.Authorization/{}",
        SubscriptionId::new(client.subscription_id()),
        collection
    )
}

/// Policy definitions visible to the client's subscription.
pub fn policy_definitions(client: &ArmClient) -> ArmListing<PolicyDefinition> {
    ArmListing::new(
        client.clone(),
        authorization_path(client, "policyDefinitions"),
        POLICY_API_VERSION,
        "Policy definition",
    )
}

/// Policy set definitions (initiatives) visible to the client's subscription.
pub fn policy_set_definitions(client: &ArmClient) -> ArmListing<PolicySetDefinition> {
    ArmListing::new(
        client.clone(),
        authorization_path(client, "policySetDefinitions"),
        POLICY_API_VERSION,
        "Policy set definition",
    )
}

pub async fn find_policy_definition_by_display_name(
    client: &ArmClient,
    display_name: &str,
) -> Result<PolicyDefinition, LookupError> {
    find_by_display_name(&policy_definitions(client), display_name).await
}

pub async fn find_policy_set_definition_by_display_name(
    client: &ArmClient,
    display_name: &str,
) -> Result<PolicySetDefinition, LookupError> {
    find_by_display_name(&policy_set_definitions(client), display_name).await
}
