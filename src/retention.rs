use log::debug;

use crate::criteria::flatten_criteria;
use crate::lifecycle::{expand_life_cycles, flatten_life_cycles};
use crate::policies::{DefaultRetentionRule, RetentionRule};
use crate::tagging::{find_tagging_criteria, DEFAULT_TAG_NAME};
use crate::wire::{AzureRetentionRule, BackupCriteria, BasePolicyRule, TaggingCriteria};

pub fn expand_default_retention_rule(rule: &DefaultRetentionRule) -> BasePolicyRule {
    BasePolicyRule::AzureRetentionRule(AzureRetentionRule {
        name: DEFAULT_TAG_NAME.to_string(),
        is_default: Some(true),
        lifecycles: expand_life_cycles(&rule.life_cycle),
    })
}

pub fn expand_retention_rules(rules: &[RetentionRule]) -> Vec<BasePolicyRule> {
    rules
        .iter()
        .map(|rule| {
            BasePolicyRule::AzureRetentionRule(AzureRetentionRule {
                name: rule.name.clone(),
                is_default: Some(false),
                lifecycles: expand_life_cycles(&rule.life_cycle),
            })
        })
        .collect()
}

pub fn flatten_default_retention_rule(rules: &[BasePolicyRule]) -> DefaultRetentionRule {
    let default_rule = rules.iter().find_map(|rule| match rule {
        BasePolicyRule::AzureRetentionRule(r) if r.is_default.unwrap_or(false) => Some(r),
        _ => None,
    });

    match default_rule {
        Some(r) => DefaultRetentionRule {
            life_cycle: flatten_life_cycles(&r.lifecycles),
        },
        None => {
            debug!("policy has no default retention rule");
            DefaultRetentionRule::default()
        }
    }
}

/// Rebuilds the named retention rules. Priority and criteria come from the
/// tagging criteria with the same name; a rule without one keeps priority 0
/// and no criteria. Criteria variants other than schedule based are skipped
/// when a schedule based block follows them.
pub fn flatten_retention_rules(
    rules: &[BasePolicyRule],
    tagging_criteria: &[TaggingCriteria],
) -> Vec<RetentionRule> {
    let mut retention_rules = Vec::new();

    for rule in rules {
        let rule = match rule {
            BasePolicyRule::AzureRetentionRule(r) if !r.is_default.unwrap_or(false) => r,
            _ => continue,
        };

        let mut priority = 0;
        let mut criteria = Vec::new();
        match find_tagging_criteria(tagging_criteria, &rule.name) {
            Some(tc) => {
                priority = tc.tagging_priority;
                if let Some(blocks) = &tc.criteria {
                    let block = blocks
                        .iter()
                        .find(|c| matches!(c, BackupCriteria::ScheduleBasedBackupCriteria(_)))
                        .or_else(|| blocks.first());
                    if let Some(c) = block {
                        criteria.push(flatten_criteria(c));
                    }
                }
            }
            None => debug!("no tagging criteria found for retention rule {}", rule.name),
        }

        retention_rules.push(RetentionRule {
            name: rule.name.clone(),
            priority,
            criteria,
            life_cycle: flatten_life_cycles(&rule.lifecycles),
        });
    }

    retention_rules
}
