use crate::error::PolicyError;
use crate::kind::PolicyKind;
use crate::policies::RetentionRuleSet;
use crate::tagging::expand_tagging_criteria;
use crate::wire::{
    AzureBackupParams, AzureBackupRule, BackupParameters, BackupSchedule, BasePolicyRule,
    DataStoreInfoBase, ScheduleBasedTriggerContext, TaggingCriteria, TriggerContext,
};

pub const BACKUP_RULE_NAME: &str = "BackupIntervals";

pub fn expand_backup_rule(
    kind: PolicyKind,
    rules: &RetentionRuleSet,
) -> Result<BasePolicyRule, PolicyError> {
    let time_zone = if rules.time_zone.is_empty() {
        None
    } else {
        Some(rules.time_zone.clone())
    };

    Ok(BasePolicyRule::AzureBackupRule(AzureBackupRule {
        name: BACKUP_RULE_NAME.to_string(),
        backup_parameters: Some(BackupParameters::AzureBackupParams(AzureBackupParams {
            backup_type: kind.backup_type().to_string(),
        })),
        data_store: DataStoreInfoBase::new(kind.backup_data_store()),
        trigger: TriggerContext::ScheduleBasedTriggerContext(ScheduleBasedTriggerContext {
            schedule: BackupSchedule {
                repeating_time_intervals: rules.backup_repeating_time_intervals.clone(),
                time_zone,
            },
            tagging_criteria: expand_tagging_criteria(&rules.retention_rule)?,
        }),
    }))
}

/// The schedule of the first backup rule with a schedule based trigger.
pub fn find_schedule(rules: &[BasePolicyRule]) -> Option<&ScheduleBasedTriggerContext> {
    rules.iter().find_map(|rule| match rule {
        BasePolicyRule::AzureBackupRule(AzureBackupRule {
            trigger: TriggerContext::ScheduleBasedTriggerContext(ctx),
            ..
        }) => Some(ctx),
        _ => None,
    })
}

/// Returns the repeating intervals and the time zone, both empty when the
/// policy has no scheduled backup rule.
pub fn flatten_backup_schedule(rules: &[BasePolicyRule]) -> (Vec<String>, String) {
    match find_schedule(rules) {
        Some(ctx) => (
            ctx.schedule.repeating_time_intervals.clone(),
            ctx.schedule.time_zone.clone().unwrap_or_default(),
        ),
        None => (Vec::new(), String::new()),
    }
}

pub fn flatten_tagging_criteria(rules: &[BasePolicyRule]) -> Vec<TaggingCriteria> {
    find_schedule(rules)
        .map(|ctx| ctx.tagging_criteria.clone())
        .unwrap_or_default()
}
