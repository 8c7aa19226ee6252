use std::fmt::{Display, Formatter};

use regex::Regex;

use crate::error::PolicyError;

pub const BACKUP_POLICY_RESOURCE_TYPE: &str = "Microsoft.DataProtection/backupVaults/backupPolicies";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackupPolicyId {
    pub subscription_id: String,
    pub resource_group: String,
    pub vault_name: String,
    pub policy_name: String,
}

const VAULT_PATTERN: &str = r"(?i)^/subscriptions/([^/]+)/resourceGroups/([^/]+)/providers/Microsoft\.DataProtection/backupVaults/([^/]+)";

impl BackupPolicyId {
    pub fn parse(id: &str) -> Result<Self, PolicyError> {
        let re = Regex::new(&format!("{}/backupPolicies/([^/]+)/?$", VAULT_PATTERN))?;
        let capture = re
            .captures(id)
            .ok_or_else(|| PolicyError::InvalidPolicyId(id.to_string()))?;

        let segment = |i: usize| capture.get(i).map(|m| m.as_str().to_string()).unwrap_or_default();

        Ok(Self {
            subscription_id: segment(1),
            resource_group: segment(2),
            vault_name: segment(3),
            policy_name: segment(4),
        })
    }

    pub fn from_vault_id(vault_id: &str, policy_name: &str) -> Result<Self, PolicyError> {
        let re = Regex::new(&format!("{}/?$", VAULT_PATTERN))?;
        let capture = re
            .captures(vault_id)
            .ok_or_else(|| PolicyError::InvalidPolicyId(vault_id.to_string()))?;

        let segment = |i: usize| capture.get(i).map(|m| m.as_str().to_string()).unwrap_or_default();

        Ok(Self {
            subscription_id: segment(1),
            resource_group: segment(2),
            vault_name: segment(3),
            policy_name: policy_name.to_string(),
        })
    }

    pub fn vault_id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.DataProtection/backupVaults/{}",
            self.subscription_id, self.resource_group, self.vault_name
        )
    }
}

impl Display for BackupPolicyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/backupPolicies/{}", self.vault_id(), self.policy_name)
    }
}

#[cfg(test)]
mod tests {
    use crate::resource_id::BackupPolicyId;

    const SUB: &str = "00000000-0000-0000-0000-000000000000";

    #[test]
    fn parse_and_format() {
        let id = format!(
            "/subscriptions/{}/resourceGroups/rg1/providers/Microsoft.DataProtection/backupVaults/vault1/backupPolicies/aks",
            SUB
        );
        let parsed = BackupPolicyId::parse(&id).unwrap();
        assert_eq!(parsed.subscription_id, SUB);
        assert_eq!(parsed.resource_group, "rg1");
        assert_eq!(parsed.vault_name, "vault1");
        assert_eq!(parsed.policy_name, "aks");
        assert_eq!(parsed.to_string(), id);
    }

    #[test]
    fn segment_keys_ignore_case() {
        let id = format!(
            "/SUBSCRIPTIONS/{}/resourcegroups/rg1/providers/microsoft.dataprotection/BACKUPVAULTS/vault1/backuppolicies/aks",
            SUB
        );
        let parsed = BackupPolicyId::parse(&id).unwrap();
        assert_eq!(parsed.policy_name, "aks");
        assert!(parsed
            .to_string()
            .contains("/providers/Microsoft.DataProtection/backupVaults/vault1/backupPolicies/aks"));
    }

    #[test]
    fn from_vault() {
        let vault = format!(
            "/subscriptions/{}/resourceGroups/rg1/providers/Microsoft.DataProtection/backupVaults/vault1",
            SUB
        );
        let id = BackupPolicyId::from_vault_id(&vault, "disk").unwrap();
        assert_eq!(id.to_string(), format!("{}/backupPolicies/disk", vault));
        assert_eq!(id.vault_id(), vault);
    }

    #[test]
    fn rejects_other_ids() {
        let cases = Vec::from([
            "",
            "/subscriptions/x/resourceGroups/rg1",
            "/subscriptions/x/resourceGroups/rg1/providers/Microsoft.RecoveryServices/vaults/v/backupPolicies/p",
            "/subscriptions/x/resourceGroups/rg1/providers/Microsoft.DataProtection/backupVaults/v/backupPolicies/p/extra",
        ]);

        for id in cases {
            assert!(BackupPolicyId::parse(id).is_err(), "{}", id);
        }
        assert!(BackupPolicyId::from_vault_id("/subscriptions/x", "p").is_err());
    }
}
