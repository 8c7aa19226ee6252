//! Conversion between a [`RetentionRuleSet`] and the flat, unordered list of
//! policy rules Azure stores.
//!
//! Expanding produces the backup rule first, then the default retention rule,
//! then one retention rule per named rule. Flattening makes no assumption about
//! the order: it looks the backup rule up by type, the default retention rule
//! by its flag, and ties each named retention rule back to its tagging criteria
//! by name. Anything it cannot correlate comes back zero valued instead of
//! failing the read.

use log::{debug, trace};

use crate::backup_rule::{expand_backup_rule, flatten_backup_schedule, flatten_tagging_criteria};
use crate::error::PolicyError;
use crate::kind::PolicyKind;
use crate::policies::RetentionRuleSet;
use crate::retention::{
    expand_default_retention_rule, expand_retention_rules, flatten_default_retention_rule,
    flatten_retention_rules,
};
use crate::wire::{BackupPolicy, BaseBackupPolicy, BasePolicyRule};

pub fn expand_rules(
    kind: PolicyKind,
    rules: &RetentionRuleSet,
) -> Result<Vec<BasePolicyRule>, PolicyError> {
    let mut policy_rules = vec![expand_backup_rule(kind, rules)?];
    policy_rules.push(expand_default_retention_rule(&rules.default_retention_rule));
    policy_rules.extend(expand_retention_rules(&rules.retention_rule));

    trace!("expanded {} policy rules for {} policy", policy_rules.len(), kind);
    Ok(policy_rules)
}

pub fn flatten_rules(policy_rules: &[BasePolicyRule]) -> RetentionRuleSet {
    let (backup_repeating_time_intervals, time_zone) = flatten_backup_schedule(policy_rules);
    let tagging_criteria = flatten_tagging_criteria(policy_rules);
    let default_retention_rule = flatten_default_retention_rule(policy_rules);
    let retention_rule = flatten_retention_rules(policy_rules, &tagging_criteria);

    debug!(
        "flattened {} policy rules into {} retention rules",
        policy_rules.len(),
        retention_rule.len()
    );

    RetentionRuleSet {
        backup_repeating_time_intervals,
        time_zone,
        default_retention_rule,
        retention_rule,
    }
}

pub fn expand_policy(
    kind: PolicyKind,
    rules: &RetentionRuleSet,
) -> Result<BaseBackupPolicy, PolicyError> {
    Ok(BaseBackupPolicy::BackupPolicy(BackupPolicy {
        datasource_types: vec![kind.datasource_type().to_string()],
        policy_rules: expand_rules(kind, rules)?,
    }))
}

pub fn flatten_policy(policy: &BaseBackupPolicy) -> Result<(PolicyKind, RetentionRuleSet), PolicyError> {
    let policy = match policy {
        BaseBackupPolicy::BackupPolicy(p) => p,
        BaseBackupPolicy::Unknown => return Err(PolicyError::UnsupportedPolicyType),
    };

    let datasource_type = policy
        .datasource_types
        .first()
        .map(String::as_str)
        .unwrap_or_default();
    let kind = PolicyKind::from_datasource_type(datasource_type)?;

    Ok((kind, flatten_rules(&policy.policy_rules)))
}
