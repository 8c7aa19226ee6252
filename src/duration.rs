use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset};
use regex::Regex;

use crate::error::PolicyError;

/// Component form of an ISO 8601 duration such as `P1Y2M3W4DT5H6M7S`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Iso8601Duration {
    pub y: u64,
    pub mo: u64,
    pub w: u64,
    pub d: u64,
    pub h: u64,
    pub mi: u64,
    pub s: u64,
}

impl Iso8601Duration {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Result<Self, PolicyError> {
        let re = Regex::new(
            r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$",
        )?;

        let capture = match re.captures(s) {
            Some(c) => c,
            None => return Err(PolicyError::InvalidDuration(s.to_string())),
        };

        // "P", "PT" and "P1DT" match the pattern but carry no designator after the prefix
        if capture.iter().skip(1).all(|c| c.is_none()) || s.ends_with('T') {
            return Err(PolicyError::InvalidDuration(s.to_string()));
        }

        let field = |i: usize| -> Result<u64, PolicyError> {
            match capture.get(i) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| PolicyError::InvalidDuration(s.to_string())),
                None => Ok(0),
            }
        };

        Ok(Self {
            y: field(1)?,
            mo: field(2)?,
            w: field(3)?,
            d: field(4)?,
            h: field(5)?,
            mi: field(6)?,
            s: field(7)?,
        })
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Display for Iso8601Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }

        write!(f, "P")?;
        for (n, unit) in [(self.y, 'Y'), (self.mo, 'M'), (self.w, 'W'), (self.d, 'D')] {
            if n > 0 {
                write!(f, "{}{}", n, unit)?;
            }
        }
        if self.h > 0 || self.mi > 0 || self.s > 0 {
            write!(f, "T")?;
            for (n, unit) in [(self.h, 'H'), (self.mi, 'M'), (self.s, 'S')] {
                if n > 0 {
                    write!(f, "{}{}", n, unit)?;
                }
            }
        }
        Ok(())
    }
}

/// An ISO 8601 repeating interval `R[n]/<start>/<period>` as used for backup schedules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatingInterval {
    pub repetitions: Option<u64>,
    pub start: DateTime<FixedOffset>,
    pub period: Iso8601Duration,
}

impl RepeatingInterval {
    pub fn from_str(s: &str) -> Result<Self, PolicyError> {
        let re = Regex::new(r"^R(\d*)/([^/]+)/([^/]+)$")?;

        let capture = match re.captures(s) {
            Some(c) => c,
            None => return Err(PolicyError::InvalidRepeatingInterval(s.to_string())),
        };

        let repetitions = match capture.get(1).map(|m| m.as_str()) {
            None | Some("") => None,
            Some(n) => Some(
                n.parse()
                    .map_err(|_| PolicyError::InvalidRepeatingInterval(s.to_string()))?,
            ),
        };

        let start = capture.get(2).map(|m| m.as_str()).unwrap_or_default();
        let start = DateTime::parse_from_rfc3339(start)
            .map_err(|_| PolicyError::InvalidRepeatingInterval(s.to_string()))?;

        let period = capture.get(3).map(|m| m.as_str()).unwrap_or_default();
        let period = Iso8601Duration::from_str(period)
            .map_err(|_| PolicyError::InvalidRepeatingInterval(s.to_string()))?;
        if period.is_zero() {
            return Err(PolicyError::InvalidRepeatingInterval(s.to_string()));
        }

        Ok(Self {
            repetitions,
            start,
            period,
        })
    }
}
