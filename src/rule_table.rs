use log::debug;
use tabled::{Style, Table, Tabled};

use crate::policies::{Criteria, LifeCycle, RetentionRuleSet};
use crate::tagging::{DEFAULT_TAG_NAME, DEFAULT_TAG_PRIORITY};

#[derive(Debug, Tabled)]
pub struct RuleRow {
    pub name: String,
    #[tabled(display_with("Self::display_priority", args))]
    pub priority: i64,
    pub criteria: String,
    pub life_cycle: String,
    #[tabled(skip)]
    pub is_default: bool,
}

impl RuleRow {
    pub fn rows(rules: &RetentionRuleSet) -> Vec<Self> {
        let mut rows = vec![Self {
            name: DEFAULT_TAG_NAME.to_string(),
            priority: DEFAULT_TAG_PRIORITY,
            criteria: "-".to_string(),
            life_cycle: display_life_cycles(&rules.default_retention_rule.life_cycle),
            is_default: true,
        }];

        for rule in &rules.retention_rule {
            rows.push(Self {
                name: rule.name.clone(),
                priority: rule.priority,
                criteria: match rule.criteria.first() {
                    Some(c) => display_criteria(c),
                    None => "(missing)".to_string(),
                },
                life_cycle: display_life_cycles(&rule.life_cycle),
                is_default: false,
            });
        }

        rows
    }

    fn display_priority(&self) -> String {
        if self.is_default {
            format!("{} (default)", self.priority)
        } else {
            self.priority.to_string()
        }
    }

    pub fn tabled(policy: &str, rules: &RetentionRuleSet) -> String {
        let table = Table::new(Self::rows(rules))
            .with(Style::modern())
            .to_string();
        let time_zone = if rules.time_zone.is_empty() {
            "UTC"
        } else {
            rules.time_zone.as_str()
        };
        debug!("rendered {} retention rules of {}", rules.retention_rule.len(), policy);
        format!(
            "policy {} backs up at {} ({})\n{}",
            policy,
            rules.backup_repeating_time_intervals.join(", "),
            time_zone,
            table
        )
    }
}

fn display_life_cycles(life_cycles: &[LifeCycle]) -> String {
    life_cycles
        .iter()
        .map(|lc| format!("{} in {}", lc.duration, lc.data_store_type))
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_criteria(criteria: &Criteria) -> String {
    if let Some(marker) = criteria.absolute_criteria {
        return format!("{:?}", marker);
    }

    let mut parts = Vec::new();
    if !criteria.days_of_week.is_empty() {
        parts.push(format!("days: {:?}", criteria.days_of_week));
    }
    if !criteria.weeks_of_month.is_empty() {
        parts.push(format!("weeks: {:?}", criteria.weeks_of_month));
    }
    if !criteria.months_of_year.is_empty() {
        parts.push(format!("months: {:?}", criteria.months_of_year));
    }
    if !criteria.scheduled_backup_times.is_empty() {
        parts.push(format!("times: {}", criteria.scheduled_backup_times.join(", ")));
    }

    if parts.is_empty() {
        "any".to_string()
    } else {
        parts.join("\n")
    }
}
