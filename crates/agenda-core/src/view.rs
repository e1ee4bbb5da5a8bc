//! Category filtering over a computed schedule.
//!
//! Filtering selects from the schedule as computed for the whole feed, so a
//! talk keeps its time slot whether or not its neighbours are visible.

use crate::schedule::ScheduleEntry;
use crate::talk::Talk;

/// Case-insensitive substring match against a talk's categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    needle: String,
}

impl CategoryFilter {
    /// Build a filter from user text. Returns `None` for empty text, which
    /// means "show everything".
    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Some(Self {
            needle: text.to_lowercase(),
        })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether any category of `talk` contains the filter text.
    pub fn matches(&self, talk: &Talk) -> bool {
        talk.categories
            .iter()
            .any(|c| c.to_lowercase().contains(&self.needle))
    }

    /// Whether `entry` is visible under this filter. Breaks never are.
    pub fn admits(&self, entry: &ScheduleEntry) -> bool {
        match entry {
            ScheduleEntry::Talk { talk, .. } => self.matches(talk),
            ScheduleEntry::Break { .. } => false,
        }
    }
}

/// Select the entries to display.
///
/// With no filter text (absent or empty) the whole schedule is returned,
/// break included. Otherwise only talks with a matching category are
/// returned and the break is dropped. An empty result is not an error.
pub fn project<'a>(schedule: &'a [ScheduleEntry], filter: Option<&str>) -> Vec<&'a ScheduleEntry> {
    match filter.and_then(CategoryFilter::new) {
        None => schedule.iter().collect(),
        Some(filter) => schedule.iter().filter(|e| filter.admits(e)).collect(),
    }
}
