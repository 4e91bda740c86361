//! Typed ID definitions for supported resource kinds.
//!
//! Literal tokens are reproduced exactly as Azure Resource Manager emits them.
//! Matching is case-sensitive: `resourcegroups` is not `resourceGroups`.

use crate::{define_resource_id, IdFormat};

// =============================================================================
// Scopes
// =============================================================================

define_resource_id! {
    /// A subscription, the root of every ARM scope.
    SubscriptionId, "subscription" {
        "subscriptions" => subscription_id,
    }
}

define_resource_id! {
    /// A resource group within a subscription.
    ResourceGroupId, "resource_group" {
        "subscriptions" => subscription_id,
        "resourceGroups" => resource_group,
    }
}

// =============================================================================
// Compute
// =============================================================================

define_resource_id! {
    VirtualMachineId, "virtual_machine" {
        "subscriptions" => subscription_id,
        "resourceGroups" => resource_group,
        "providers" "Microsoft.Compute" "virtualMachines" => name,
    }
}

define_resource_id! {
    /// An AKS managed cluster.
    KubernetesClusterId, "kubernetes_cluster" {
        "subscriptions" => subscription_id,
        "resourceGroups" => resource_group,
        "providers" "Microsoft.ContainerService" "managedClusters" => name,
    }
}

// =============================================================================
// SQL
// =============================================================================

define_resource_id! {
    SqlServerId, "sql_server" {
        "subscriptions" => subscription_id,
        "resourceGroups" => resource_group,
        "providers" "Microsoft.Sql" "servers" => name,
    }
}

define_resource_id! {
    SqlDatabaseId, "sql_database" {
        "subscriptions" => subscription_id,
        "resourceGroups" => resource_group,
        "providers" "Microsoft.Sql" "servers" => server_name,
        "databases" => name,
    }
}

// =============================================================================
// Time Series Insights
// =============================================================================

define_resource_id! {
    TimeSeriesInsightsEnvironmentId, "time_series_insights_environment" {
        "subscriptions" => subscription_id,
        "resourceGroups" => resource_group,
        "providers" "Microsoft.TimeSeriesInsights" "environments" => name,
    }
}

define_resource_id! {
    TimeSeriesInsightsReferenceDataSetId, "time_series_insights_reference_data_set" {
        "subscriptions" => subscription_id,
        "resourceGroups" => resource_group,
        "providers" "Microsoft.TimeSeriesInsights" "environments" => environment_name,
        "referenceDataSets" => name,
    }
}

define_resource_id! {
    TimeSeriesInsightsAccessPolicyId, "time_series_insights_access_policy" {
        "subscriptions" => subscription_id,
        "resourceGroups" => resource_group,
        "providers" "Microsoft.TimeSeriesInsights" "environments" => environment_name,
        "accessPolicies" => name,
    }
}

// =============================================================================
// Policy and Advisor (subscription scoped)
// =============================================================================

define_resource_id! {
    PolicyDefinitionId, "policy_definition" {
        "subscriptions" => subscription_id,
        "providers" "Microsoft.Authorization" "policyDefinitions" => name,
    }
}

define_resource_id! {
    PolicySetDefinitionId, "policy_set_definition" {
        "subscriptions" => subscription_id,
        "providers" "Microsoft.Authorization" "policySetDefinitions" => name,
    }
}

define_resource_id! {
    /// A suppression (snooze or dismissal) of an Advisor recommendation.
    AdvisorSuppressionId, "advisor_suppression" {
        "subscriptions" => subscription_id,
        "providers" "Microsoft.Advisor" "recommendations" => recommendation_id,
        "suppressions" => name,
    }
}

// =============================================================================
// Parent scopes
// =============================================================================

impl ResourceGroupId {
    /// The subscription containing this resource group.
    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(&self.subscription_id)
    }
}

impl SqlDatabaseId {
    /// The server hosting this database.
    #[must_use]
    pub fn server(&self) -> SqlServerId {
        SqlServerId::new(&self.subscription_id, &self.resource_group, &self.server_name)
    }
}

impl TimeSeriesInsightsReferenceDataSetId {
    /// The environment owning this reference data set.
    #[must_use]
    pub fn environment(&self) -> TimeSeriesInsightsEnvironmentId {
        TimeSeriesInsightsEnvironmentId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.environment_name,
        )
    }
}

impl TimeSeriesInsightsAccessPolicyId {
    /// The environment owning this access policy.
    #[must_use]
    pub fn environment(&self) -> TimeSeriesInsightsEnvironmentId {
        TimeSeriesInsightsEnvironmentId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.environment_name,
        )
    }
}

// =============================================================================
// Catalog
// =============================================================================

static CATALOG: [IdFormat; 12] = [
    SubscriptionId::FORMAT,
    ResourceGroupId::FORMAT,
    VirtualMachineId::FORMAT,
    KubernetesClusterId::FORMAT,
    SqlServerId::FORMAT,
    SqlDatabaseId::FORMAT,
    TimeSeriesInsightsEnvironmentId::FORMAT,
    TimeSeriesInsightsReferenceDataSetId::FORMAT,
    TimeSeriesInsightsAccessPolicyId::FORMAT,
    PolicyDefinitionId::FORMAT,
    PolicySetDefinitionId::FORMAT,
    AdvisorSuppressionId::FORMAT,
];

/// Every supported resource kind.
#[must_use]
pub fn catalog() -> &'static [IdFormat] {
    &CATALOG
}

/// Looks up a resource kind by its slug.
pub fn find_format(kind: &str) -> Result<&'static IdFormat, crate::IdError> {
    CATALOG
        .iter()
        .find(|format| format.kind() == kind)
        .ok_or_else(|| crate::IdError::UnknownKind(kind.to_string()))
}

// =============================================================================
// Tests
// =============================================================================
