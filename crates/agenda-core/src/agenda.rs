//! Immutable snapshot of a loaded agenda.
//!
//! An [`Agenda`] owns the talk feed, the schedule config and the schedule
//! computed from them. It is built once after the feed has loaded and then
//! only read, so every view is projected from the same time slots.

use serde::Serialize;

use crate::schedule::{compute_schedule, ScheduleConfig, ScheduleEntry};
use crate::talk::Talk;
use crate::view::project;

#[derive(Debug, Clone)]
pub struct Agenda {
    talks: Vec<Talk>,
    config: ScheduleConfig,
    schedule: Vec<ScheduleEntry>,
}

impl Agenda {
    pub fn new(talks: Vec<Talk>, config: ScheduleConfig) -> Self {
        let schedule = compute_schedule(&talks, &config);
        Self {
            talks,
            config,
            schedule,
        }
    }

    pub fn talks(&self) -> &[Talk] {
        &self.talks
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// The full schedule, break included.
    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    /// Entries visible under `filter`. See [`project`].
    pub fn view(&self, filter: Option<&str>) -> AgendaView<'_> {
        AgendaView {
            filter: filter.filter(|f| !f.is_empty()).map(str::to_string),
            entries: project(&self.schedule, filter),
        }
    }

    /// Distinct categories in first-seen order, compared case-insensitively.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<String> = Vec::new();
        let mut out = Vec::new();
        for category in self.talks.iter().flat_map(|t| t.categories.iter()) {
            let key = category.to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                out.push(category.as_str());
            }
        }
        out
    }
}

/// Entries selected for display, plus what the renderer needs to choose
/// between the list and the "no results" state.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaView<'a> {
    pub filter: Option<String>,
    pub entries: Vec<&'a ScheduleEntry>,
}

impl AgendaView<'_> {
    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agenda() -> Agenda {
        Agenda::new(
            vec![
                Talk::new("Ownership", 50).with_categories(["Rust", "Beginner"]),
                Talk::new("Async", 45).with_categories(["rust", "Async"]),
                Talk::new("Types", 60).with_categories(["Theory"]),
                Talk::new("CSS", 30).with_categories(["Frontend"]),
            ],
            ScheduleConfig::default(),
        )
    }

    #[test]
    fn schedule_is_computed_once_on_build() {
        let a = agenda();
        assert_eq!(a.schedule().len(), 5);
        assert_eq!(a.talks().len(), 4);
        assert_eq!(a.config(), &ScheduleConfig::default());
    }

    #[test]
    fn unfiltered_view() {
        let a = agenda();
        let view = a.view(None);
        assert!(!view.is_filtered());
        assert_eq!(view.entries.len(), 5);
    }

    #[test]
    fn empty_text_is_unfiltered() {
        let a = agenda();
        assert!(!a.view(Some("")).is_filtered());
    }

    #[test]
    fn filtered_view_reports_empty() {
        let a = agenda();
        let view = a.view(Some("haskell"));
        assert!(view.is_filtered());
        assert!(view.is_empty());
    }

    #[test]
    fn filtered_view_shares_slots_with_full_schedule() {
        let a = agenda();
        let view = a.view(Some("theory"));
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0], &a.schedule()[2]);
    }

    #[test]
    fn categories_are_deduplicated_case_insensitively() {
        let a = agenda();
        assert_eq!(
            a.categories(),
            vec!["Rust", "Beginner", "Async", "Theory", "Frontend"]
        );
    }
}
