use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::kind::PolicyKind;
use crate::policies::RetentionRuleSet;
use crate::resource_id::{BackupPolicyId, BACKUP_POLICY_RESOURCE_TYPE};
use crate::rules::{expand_policy, flatten_policy};
use crate::wire::BaseBackupPolicyResource;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub policies: Vec<PolicyConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub name: String,
    pub kind: PolicyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_id: Option<String>,
    #[serde(flatten)]
    pub rules: RetentionRuleSet,
}

impl PolicyConfig {
    pub fn filter_by_names(policies: &[Self], names: &[String]) -> Vec<Self> {
        if names.is_empty() {
            return policies.to_vec();
        }

        policies
            .iter()
            .filter(|p| names.contains(&p.name))
            .cloned()
            .collect::<Vec<_>>()
    }

    /// Builds the request body for this policy. The resource ID is only set
    /// when the policy names its vault.
    pub fn to_resource(&self) -> Result<BaseBackupPolicyResource, PolicyError> {
        let id = match &self.vault_id {
            Some(vault_id) => Some(BackupPolicyId::from_vault_id(vault_id, &self.name)?.to_string()),
            None => None,
        };

        Ok(BaseBackupPolicyResource {
            id,
            name: Some(self.name.clone()),
            r#type: Some(BACKUP_POLICY_RESOURCE_TYPE.to_string()),
            properties: expand_policy(self.kind, &self.rules)?,
        })
    }

    pub fn from_resource(resource: &BaseBackupPolicyResource) -> Result<Self, PolicyError> {
        let (kind, rules) = flatten_policy(&resource.properties)?;

        let id = match &resource.id {
            Some(id) => Some(BackupPolicyId::parse(id)?),
            None => None,
        };

        let name = match (&resource.name, &id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.policy_name.clone(),
            (None, None) => String::new(),
        };

        let vault_id = id.map(|id| id.vault_id());

        Ok(Self {
            name,
            kind,
            vault_id,
            rules,
        })
    }
}
