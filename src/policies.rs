use serde::{Deserialize, Serialize};

use crate::wire::{AbsoluteMarker, DataStoreType, DayOfWeek, Month, WeekNumber};

/// User facing retention configuration of a backup policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionRuleSet {
    pub backup_repeating_time_intervals: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time_zone: String,
    pub default_retention_rule: DefaultRetentionRule,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub retention_rule: Vec<RetentionRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultRetentionRule {
    #[serde(default)]
    pub life_cycle: Vec<LifeCycle>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionRule {
    pub name: String,
    pub priority: i64,
    #[serde(default)]
    pub criteria: Vec<Criteria>,
    #[serde(default)]
    pub life_cycle: Vec<LifeCycle>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_criteria: Option<AbsoluteMarker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<DayOfWeek>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub months_of_year: Vec<Month>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weeks_of_month: Vec<WeekNumber>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scheduled_backup_times: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeCycle {
    pub duration: String,
    pub data_store_type: DataStoreType,
}
