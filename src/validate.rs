use chrono::DateTime;
use log::trace;

use crate::duration::{Iso8601Duration, RepeatingInterval};
use crate::error::PolicyError;
use crate::kind::PolicyKind;
use crate::policies::{LifeCycle, RetentionRuleSet};
use crate::tagging::{names_match, DEFAULT_TAG_NAME};

fn validate_life_cycles(kind: PolicyKind, life_cycles: &[LifeCycle]) -> Result<(), PolicyError> {
    for lc in life_cycles {
        let duration = Iso8601Duration::from_str(&lc.duration)?;
        if duration.is_zero() {
            return Err(PolicyError::ZeroDuration(lc.duration.clone()));
        }

        if !kind.life_cycle_data_stores().contains(&lc.data_store_type) {
            return Err(PolicyError::UnsupportedDataStore {
                kind: kind.to_string(),
                data_store: lc.data_store_type.to_string(),
            });
        }
    }

    Ok(())
}

/// Checks a rule set before it is expanded. A named rule may carry at most one
/// criteria block; criteria presence is left to the expansion, and an absolute marker combined with other criteria is accepted
/// as is.
pub fn validate_rule_set(kind: PolicyKind, rules: &RetentionRuleSet) -> Result<(), PolicyError> {
    if rules.backup_repeating_time_intervals.is_empty() {
        return Err(PolicyError::NoBackupIntervals);
    }
    for interval in &rules.backup_repeating_time_intervals {
        let parsed = RepeatingInterval::from_str(interval)?;
        trace!(
            "backup interval starts at {} and repeats every {} ({:?} times)",
            parsed.start,
            parsed.period,
            parsed.repetitions
        );
    }

    if rules.default_retention_rule.life_cycle.is_empty() {
        return Err(PolicyError::NoDefaultLifeCycle);
    }
    validate_life_cycles(kind, &rules.default_retention_rule.life_cycle)?;

    for (i, rule) in rules.retention_rule.iter().enumerate() {
        if rule.name.is_empty() {
            return Err(PolicyError::EmptyRuleName);
        }
        if names_match(&rule.name, DEFAULT_TAG_NAME) {
            return Err(PolicyError::ReservedRuleName(rule.name.clone()));
        }
        if rules.retention_rule[..i]
            .iter()
            .any(|other| names_match(&other.name, &rule.name))
        {
            return Err(PolicyError::DuplicateRuleName(rule.name.clone()));
        }

        validate_life_cycles(kind, &rule.life_cycle)?;

        if rule.criteria.len() > 1 {
            return Err(PolicyError::MultipleCriteria {
                rule: rule.name.clone(),
            });
        }
        for criteria in &rule.criteria {
            for time in &criteria.scheduled_backup_times {
                DateTime::parse_from_rfc3339(time)
                    .map_err(|_| PolicyError::InvalidScheduleTime(time.clone()))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::kind::PolicyKind;
    use crate::policies::{Criteria, DefaultRetentionRule, LifeCycle, RetentionRule, RetentionRuleSet};
    use crate::validate::validate_rule_set;
    use crate::wire::{AbsoluteMarker, DataStoreType, DayOfWeek};

    fn vault(duration: &str) -> LifeCycle {
        LifeCycle {
            duration: duration.to_string(),
            data_store_type: DataStoreType::VaultStore,
        }
    }

    fn rule(name: &str) -> RetentionRule {
        RetentionRule {
            name: name.to_string(),
            priority: 10,
            criteria: vec![Criteria {
                days_of_week: vec![DayOfWeek::Sunday],
                scheduled_backup_times: vec!["2021-05-23T02:30:00Z".to_string()],
                ..Criteria::default()
            }],
            life_cycle: vec![vault("P4W")],
        }
    }

    fn valid() -> RetentionRuleSet {
        RetentionRuleSet {
            backup_repeating_time_intervals: vec!["R/2021-05-23T02:30:00+00:00/P1W".to_string()],
            time_zone: String::new(),
            default_retention_rule: DefaultRetentionRule {
                life_cycle: vec![vault("P7D")],
            },
            retention_rule: vec![rule("Weekly")],
        }
    }

    #[test]
    fn accepts_valid_rule_set() {
        validate_rule_set(PolicyKind::PostgreSqlFlexibleServer, &valid()).unwrap();
    }

    #[test]
    fn accepts_absolute_marker_with_other_criteria() {
        let mut rules = valid();
        rules.retention_rule[0].criteria[0].absolute_criteria = Some(AbsoluteMarker::FirstOfMonth);
        validate_rule_set(PolicyKind::MySqlFlexibleServer, &rules).unwrap();
    }

    #[test]
    fn accepts_missing_criteria() {
        let mut rules = valid();
        rules.retention_rule[0].criteria.clear();
        validate_rule_set(PolicyKind::MySqlFlexibleServer, &rules).unwrap();
    }

    #[test]
    fn rejects() {
        let mut no_intervals = valid();
        no_intervals.backup_repeating_time_intervals.clear();

        let mut bad_interval = valid();
        bad_interval.backup_repeating_time_intervals = vec!["P1W".to_string()];

        let mut no_default = valid();
        no_default.default_retention_rule.life_cycle.clear();

        let mut bad_duration = valid();
        bad_duration.retention_rule[0].life_cycle[0].duration = "7 days".to_string();

        let mut zero_duration = valid();
        zero_duration.default_retention_rule.life_cycle[0].duration = "P0D".to_string();

        let mut wrong_store = valid();
        wrong_store.default_retention_rule.life_cycle[0].data_store_type =
            DataStoreType::OperationalStore;

        let mut empty_name = valid();
        empty_name.retention_rule[0].name = String::new();

        let mut reserved = valid();
        reserved.retention_rule[0].name = "default".to_string();

        let mut duplicate = valid();
        duplicate.retention_rule.push(rule("WEEKLY"));

        let mut two_criteria = valid();
        two_criteria.retention_rule[0].criteria.push(Criteria {
            days_of_week: vec![DayOfWeek::Monday],
            ..Criteria::default()
        });

        let mut bad_time = valid();
        bad_time.retention_rule[0].criteria[0].scheduled_backup_times = vec!["02:30".to_string()];

        let cases = Vec::from([
            (no_intervals, "at least one backup repeating time interval"),
            (bad_interval, "not a valid ISO 8601 repeating interval"),
            (no_default, "requires at least one life cycle"),
            (bad_duration, "not a valid ISO 8601 duration"),
            (zero_duration, "must not be zero"),
            (wrong_store, "OperationalStore is not supported"),
            (empty_name, "name must not be empty"),
            (reserved, "reserved for the default retention rule"),
            (duplicate, "used more than once"),
            (two_criteria, "at most one block"),
            (bad_time, "not a valid RFC3339 timestamp"),
        ]);

        for (rules, expected) in cases {
            let err = validate_rule_set(PolicyKind::PostgreSqlFlexibleServer, &rules).unwrap_err();
            assert!(err.to_string().contains(expected), "unexpected error: {}", err);
        }
    }

    #[test]
    fn postgresql_accepts_archive_store() {
        let mut rules = valid();
        rules.retention_rule[0].life_cycle.push(LifeCycle {
            duration: "P1Y".to_string(),
            data_store_type: DataStoreType::ArchiveStore,
        });

        validate_rule_set(PolicyKind::PostgreSql, &rules).unwrap();
        assert!(validate_rule_set(PolicyKind::PostgreSqlFlexibleServer, &rules).is_err());
    }
}
