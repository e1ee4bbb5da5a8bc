//! Schedule types: the calculator's configuration and its output entries.
//!
//! All times are minutes from midnight of the conference day (see
//! [`crate::clock`]). Entries are produced only by [`compute_schedule`] and
//! are listed in chronological order, which is also feed order for talks.

mod calculator;

pub use calculator::compute_schedule;

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::ValidationError;
use crate::talk::Talk;

/// Label carried by the lunch break entry.
pub const LUNCH_LABEL: &str = "Lunch Break";

/// Rules for laying talks out on the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Anchor time, minutes from midnight. Stored as `"HH:MM"`.
    #[serde(default = "default_start_of_day", with = "clock::serde_hhmm")]
    pub start_of_day: i64,
    /// Silent gap between consecutive talks, in minutes.
    #[serde(default = "default_transition_minutes")]
    pub transition_minutes: i64,
    /// Length of the lunch break, in minutes.
    #[serde(default = "default_lunch_minutes")]
    pub lunch_minutes: i64,
    /// 0-based talk index after which lunch is inserted.
    ///
    /// `None` (stored as a negative number) means no lunch.
    #[serde(default = "default_lunch_after_index", with = "serde_lunch_index")]
    pub lunch_after_index: Option<usize>,
}

fn default_start_of_day() -> i64 {
    10 * 60
}
fn default_transition_minutes() -> i64 {
    10
}
fn default_lunch_minutes() -> i64 {
    60
}
fn default_lunch_after_index() -> Option<usize> {
    Some(2)
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_of_day: default_start_of_day(),
            transition_minutes: default_transition_minutes(),
            lunch_minutes: default_lunch_minutes(),
            lunch_after_index: default_lunch_after_index(),
        }
    }
}

impl ScheduleConfig {
    /// Config with no lunch break.
    pub fn without_lunch(mut self) -> Self {
        self.lunch_after_index = None;
        self
    }

    /// Whether a lunch break lands in a schedule of `talk_count` talks.
    pub fn lunch_inserted(&self, talk_count: usize) -> bool {
        matches!(self.lunch_after_index, Some(i) if i < talk_count)
    }

    /// Number of entries [`compute_schedule`] yields for `talk_count` talks.
    pub fn expected_entry_count(&self, talk_count: usize) -> usize {
        talk_count + usize::from(self.lunch_inserted(talk_count))
    }

    /// Reject negative gaps, which would make consecutive slots overlap.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, minutes) in [
            ("transition_minutes", self.transition_minutes),
            ("lunch_minutes", self.lunch_minutes),
        ] {
            if minutes < 0 {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must be >= 0, got {minutes}"),
                });
            }
        }
        Ok(())
    }
}

/// Negative or absent index in the file means "no lunch".
mod serde_lunch_index {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match index {
            Some(i) => serializer.serialize_u64(*i as u64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<i64>::deserialize(deserializer)?;
        Ok(raw.and_then(|i| usize::try_from(i).ok()))
    }
}

/// One scheduled unit of the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScheduleEntry {
    /// A talk slot. `index` is the talk's position in the feed.
    Talk {
        start_min: i64,
        end_min: i64,
        index: usize,
        talk: Talk,
    },
    /// A rendered break (the lunch).
    Break {
        start_min: i64,
        end_min: i64,
        label: String,
    },
}

impl ScheduleEntry {
    pub fn start_min(&self) -> i64 {
        match self {
            Self::Talk { start_min, .. } | Self::Break { start_min, .. } => *start_min,
        }
    }

    pub fn end_min(&self) -> i64 {
        match self {
            Self::Talk { end_min, .. } | Self::Break { end_min, .. } => *end_min,
        }
    }

    pub fn duration_min(&self) -> i64 {
        self.end_min().saturating_sub(self.start_min())
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break { .. })
    }

    /// The talk in this slot, if it is one.
    pub fn as_talk(&self) -> Option<&Talk> {
        match self {
            Self::Talk { talk, .. } => Some(talk),
            Self::Break { .. } => None,
        }
    }

    /// `"10:00 AM - 10:50 AM"`.
    pub fn time_range(&self) -> String {
        clock::format_time_range(self.start_min(), self.end_min())
    }
}
