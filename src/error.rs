use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PolicyError {
    MissingCriteria { rule: String },
    MultipleCriteria { rule: String },
    InvalidDuration(String),
    ZeroDuration(String),
    InvalidRepeatingInterval(String),
    InvalidScheduleTime(String),
    NoBackupIntervals,
    NoDefaultLifeCycle,
    UnsupportedDataStore { kind: String, data_store: String },
    EmptyRuleName,
    DuplicateRuleName(String),
    ReservedRuleName(String),
    UnknownDatasourceType(String),
    UnsupportedPolicyType,
    InvalidPolicyId(String),
    Regex(regex::Error),
}

impl Display for PolicyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyError::MissingCriteria { rule } => write!(
                f,
                "retention rule {}: criteria is a required field, cannot leave blank",
                rule
            ),
            PolicyError::MultipleCriteria { rule } => write!(
                f,
                "retention rule {}: criteria accepts at most one block",
                rule
            ),
            PolicyError::InvalidDuration(s) => {
                write!(f, "{:?} is not a valid ISO 8601 duration", s)
            }
            PolicyError::ZeroDuration(s) => write!(f, "duration {:?} must not be zero", s),
            PolicyError::InvalidRepeatingInterval(s) => {
                write!(f, "{:?} is not a valid ISO 8601 repeating interval", s)
            }
            PolicyError::InvalidScheduleTime(s) => {
                write!(f, "{:?} is not a valid RFC3339 timestamp", s)
            }
            PolicyError::NoBackupIntervals => {
                write!(f, "at least one backup repeating time interval is required")
            }
            PolicyError::NoDefaultLifeCycle => {
                write!(f, "default retention rule requires at least one life cycle")
            }
            PolicyError::UnsupportedDataStore { kind, data_store } => write!(
                f,
                "data store type {} is not supported by {} backup policies",
                data_store, kind
            ),
            PolicyError::EmptyRuleName => write!(f, "retention rule name must not be empty"),
            PolicyError::DuplicateRuleName(name) => {
                write!(f, "retention rule name {:?} is used more than once", name)
            }
            PolicyError::ReservedRuleName(name) => write!(
                f,
                "retention rule name {:?} is reserved for the default retention rule",
                name
            ),
            PolicyError::UnknownDatasourceType(t) => {
                write!(f, "datasource type {:?} is not supported", t)
            }
            PolicyError::UnsupportedPolicyType => {
                write!(f, "policy properties are not a BackupPolicy")
            }
            PolicyError::InvalidPolicyId(id) => {
                write!(f, "{:?} is not a valid backup policy or backup vault ID", id)
            }
            PolicyError::Regex(e) => write!(f, "Error while compiling pattern: {}", e),
        }
    }
}

impl Error for PolicyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PolicyError::Regex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for PolicyError {
    fn from(e: regex::Error) -> Self {
        PolicyError::Regex(e)
    }
}
