//! Request and response bodies of the Data Protection backup policy API
//! (`2024-04-01`). Polymorphic types are discriminated by `objectType`; any
//! discriminator this tool does not know about lands in an `Unknown` variant.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub const DATA_STORE_INFO_BASE: &str = "DataStoreInfoBase";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseBackupPolicyResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub properties: BaseBackupPolicy,
}

/// Body of a policy GET or LIST response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PolicyResponse {
    List {
        value: Vec<BaseBackupPolicyResource>,
        #[serde(default, rename = "nextLink")]
        next_link: Option<String>,
    },
    Single(BaseBackupPolicyResource),
}

impl PolicyResponse {
    pub fn next_link(&self) -> Option<&str> {
        match self {
            PolicyResponse::List { next_link, .. } => next_link.as_deref(),
            PolicyResponse::Single(_) => None,
        }
    }

    pub fn into_resources(self) -> Vec<BaseBackupPolicyResource> {
        match self {
            PolicyResponse::List { value, .. } => value,
            PolicyResponse::Single(resource) => vec![resource],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "objectType")]
pub enum BaseBackupPolicy {
    BackupPolicy(BackupPolicy),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPolicy {
    pub datasource_types: Vec<String>,
    pub policy_rules: Vec<BasePolicyRule>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "objectType")]
pub enum BasePolicyRule {
    AzureBackupRule(AzureBackupRule),
    AzureRetentionRule(AzureRetentionRule),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBackupRule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_parameters: Option<BackupParameters>,
    pub data_store: DataStoreInfoBase,
    pub trigger: TriggerContext,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "objectType")]
pub enum BackupParameters {
    AzureBackupParams(AzureBackupParams),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBackupParams {
    pub backup_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "objectType")]
pub enum TriggerContext {
    ScheduleBasedTriggerContext(ScheduleBasedTriggerContext),
    AdhocBasedTriggerContext(AdhocBasedTriggerContext),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBasedTriggerContext {
    pub schedule: BackupSchedule,
    pub tagging_criteria: Vec<TaggingCriteria>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdhocBasedTriggerContext {
    pub tagging_criteria: AdhocBasedTaggingCriteria,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdhocBasedTaggingCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_info: Option<RetentionTag>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSchedule {
    pub repeating_time_intervals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggingCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<BackupCriteria>>,
    pub is_default: bool,
    pub tag_info: RetentionTag,
    pub tagging_priority: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tag_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "objectType")]
pub enum BackupCriteria {
    ScheduleBasedBackupCriteria(ScheduleBasedBackupCriteria),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBasedBackupCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_criteria: Option<Vec<AbsoluteMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_month: Option<Vec<Day>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_the_week: Option<Vec<DayOfWeek>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_of_year: Option<Vec<Month>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_times: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_of_the_month: Option<Vec<WeekNumber>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_last: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureRetentionRule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    pub lifecycles: Vec<SourceLifeCycle>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLifeCycle {
    pub delete_after: DeleteOption,
    pub source_data_store: DataStoreInfoBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_data_store_copy_settings: Option<Vec<TargetCopySetting>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "objectType")]
pub enum DeleteOption {
    AbsoluteDeleteOption { duration: String },
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCopySetting {
    pub copy_after: CopyOption,
    pub data_store: DataStoreInfoBase,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "objectType")]
pub enum CopyOption {
    CopyOnExpiryOption,
    CustomCopyOption {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
    },
    ImmediateCopyOption,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStoreInfoBase {
    pub data_store_type: DataStoreType,
    pub object_type: String,
}

impl DataStoreInfoBase {
    pub fn new(data_store_type: DataStoreType) -> Self {
        Self {
            data_store_type,
            object_type: DATA_STORE_INFO_BASE.to_string(),
        }
    }
}

/// Store types outside the three known ones are kept verbatim so a read
/// never fails on them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataStoreType {
    ArchiveStore,
    OperationalStore,
    VaultStore,
    Other(String),
}

impl From<String> for DataStoreType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ArchiveStore" => DataStoreType::ArchiveStore,
            "OperationalStore" => DataStoreType::OperationalStore,
            "VaultStore" => DataStoreType::VaultStore,
            _ => DataStoreType::Other(s),
        }
    }
}

impl From<DataStoreType> for String {
    fn from(store: DataStoreType) -> Self {
        store.to_string()
    }
}

impl Display for DataStoreType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DataStoreType::ArchiveStore => "ArchiveStore",
            DataStoreType::OperationalStore => "OperationalStore",
            DataStoreType::VaultStore => "VaultStore",
            DataStoreType::Other(s) => s,
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbsoluteMarker {
    AllBackup,
    FirstOfDay,
    FirstOfMonth,
    FirstOfWeek,
    FirstOfYear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Friday,
    Monday,
    Saturday,
    Sunday,
    Thursday,
    Tuesday,
    Wednesday,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    April,
    August,
    December,
    February,
    January,
    July,
    June,
    March,
    May,
    November,
    October,
    September,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekNumber {
    First,
    Fourth,
    Last,
    Second,
    Third,
}
