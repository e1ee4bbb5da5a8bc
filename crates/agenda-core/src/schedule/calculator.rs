//! Slot assignment for a single-track day.

use tracing::debug;

use super::{ScheduleConfig, ScheduleEntry, LUNCH_LABEL};
use crate::talk::Talk;

/// Assign a time slot to every talk, inserting the lunch break.
///
/// A cursor starts at `config.start_of_day`. Each talk occupies
/// `[cursor, cursor + duration)`. After the talk at
/// `config.lunch_after_index` a lunch entry is emitted and the cursor moves
/// past it; after any other talk except the last, the cursor skips the
/// transition gap without emitting an entry.
///
/// Durations are taken as given: zero or negative values are not rejected.
/// The cursor is never wrapped at midnight. Arithmetic saturates at the
/// `i64` bounds.
pub fn compute_schedule(talks: &[Talk], config: &ScheduleConfig) -> Vec<ScheduleEntry> {
    let mut entries = Vec::with_capacity(config.expected_entry_count(talks.len()));
    let mut cursor = config.start_of_day;
    let last = talks.len().saturating_sub(1);

    for (index, talk) in talks.iter().enumerate() {
        let start_min = cursor;
        cursor = cursor.saturating_add(talk.duration);
        entries.push(ScheduleEntry::Talk {
            start_min,
            end_min: cursor,
            index,
            talk: talk.clone(),
        });

        if config.lunch_after_index == Some(index) {
            let lunch_start = cursor;
            cursor = cursor.saturating_add(config.lunch_minutes);
            entries.push(ScheduleEntry::Break {
                start_min: lunch_start,
                end_min: cursor,
                label: LUNCH_LABEL.to_string(),
            });
        } else if index < last {
            cursor = cursor.saturating_add(config.transition_minutes);
        }
    }

    debug!(
        talks = talks.len(),
        entries = entries.len(),
        day_end = cursor,
        "computed schedule"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talks(durations: &[i64]) -> Vec<Talk> {
        durations
            .iter()
            .enumerate()
            .map(|(i, d)| Talk::new(format!("Talk {i}"), *d))
            .collect()
    }

    fn slots(entries: &[ScheduleEntry]) -> Vec<(i64, i64, bool)> {
        entries
            .iter()
            .map(|e| (e.start_min(), e.end_min(), e.is_break()))
            .collect()
    }

    #[test]
    fn conference_day() {
        let entries = compute_schedule(&talks(&[50, 45, 60, 30]), &ScheduleConfig::default());
        assert_eq!(
            slots(&entries),
            vec![
                (600, 650, false),
                (660, 705, false),
                (715, 775, false),
                (775, 835, true),
                (845, 875, false),
            ]
        );
        let ranges: Vec<String> = entries.iter().map(ScheduleEntry::time_range).collect();
        assert_eq!(
            ranges,
            vec![
                "10:00 AM - 10:50 AM",
                "11:00 AM - 11:45 AM",
                "11:55 AM - 12:55 PM",
                "12:55 PM - 1:55 PM",
                "2:05 PM - 2:35 PM",
            ]
        );
    }

    #[test]
    fn break_carries_lunch_label() {
        let entries = compute_schedule(&talks(&[50, 45, 60, 30]), &ScheduleConfig::default());
        match &entries[3] {
            ScheduleEntry::Break { label, .. } => assert_eq!(label, "Lunch Break"),
            other => panic!("expected lunch, got {other:?}"),
        }
    }

    #[test]
    fn talk_entries_keep_feed_index() {
        let entries = compute_schedule(&talks(&[50, 45, 60, 30]), &ScheduleConfig::default());
        let indices: Vec<usize> = entries
            .iter()
            .filter_map(|e| match e {
                ScheduleEntry::Talk { index, .. } => Some(*index),
                ScheduleEntry::Break { .. } => None,
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_feed_gives_empty_schedule() {
        assert!(compute_schedule(&[], &ScheduleConfig::default()).is_empty());
    }

    #[test]
    fn lunch_index_out_of_range_inserts_nothing() {
        let entries = compute_schedule(&talks(&[30, 30]), &ScheduleConfig::default());
        assert_eq!(slots(&entries), vec![(600, 630, false), (640, 670, false)]);
    }

    #[test]
    fn no_lunch_configured() {
        let cfg = ScheduleConfig::default().without_lunch();
        let entries = compute_schedule(&talks(&[30, 30, 30, 30]), &cfg);
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| !e.is_break()));
        assert_eq!(entries[3].start_min(), 600 + 3 * 40);
    }

    #[test]
    fn lunch_after_last_talk_closes_the_day() {
        let cfg = ScheduleConfig {
            lunch_after_index: Some(1),
            ..ScheduleConfig::default()
        };
        let entries = compute_schedule(&talks(&[30, 30]), &cfg);
        assert_eq!(
            slots(&entries),
            vec![(600, 630, false), (640, 670, false), (670, 730, true)]
        );
    }

    #[test]
    fn lunch_after_first_talk() {
        let cfg = ScheduleConfig {
            lunch_after_index: Some(0),
            ..ScheduleConfig::default()
        };
        let entries = compute_schedule(&talks(&[30, 30]), &cfg);
        assert_eq!(
            slots(&entries),
            vec![(600, 630, false), (630, 690, true), (690, 720, false)]
        );
    }

    #[test]
    fn single_talk_has_no_trailing_transition() {
        let cfg = ScheduleConfig::default().without_lunch();
        let entries = compute_schedule(&talks(&[45]), &cfg);
        assert_eq!(slots(&entries), vec![(600, 645, false)]);
    }

    #[test]
    fn zero_duration_is_accepted() {
        let cfg = ScheduleConfig::default().without_lunch();
        let entries = compute_schedule(&talks(&[0, 20]), &cfg);
        assert_eq!(slots(&entries), vec![(600, 600, false), (610, 630, false)]);
    }

    #[test]
    fn negative_duration_is_not_validated() {
        let cfg = ScheduleConfig::default().without_lunch();
        let entries = compute_schedule(&talks(&[-15, 20]), &cfg);
        assert_eq!(slots(&entries), vec![(600, 585, false), (595, 615, false)]);
    }

    #[test]
    fn zero_transition_packs_talks() {
        let cfg = ScheduleConfig {
            transition_minutes: 0,
            lunch_after_index: None,
            ..ScheduleConfig::default()
        };
        let entries = compute_schedule(&talks(&[30, 30]), &cfg);
        assert_eq!(entries[1].start_min(), entries[0].end_min());
    }

    #[test]
    fn cursor_runs_past_midnight_unwrapped() {
        let cfg = ScheduleConfig {
            start_of_day: 23 * 60,
            lunch_after_index: None,
            ..ScheduleConfig::default()
        };
        let entries = compute_schedule(&talks(&[50, 50]), &cfg);
        assert_eq!(entries[1].start_min(), 1440);
        assert_eq!(entries[1].end_min(), 1490);
        assert_eq!(entries[1].time_range(), "12:00 AM - 12:50 AM");
    }

    #[test]
    fn huge_durations_saturate() {
        let cfg = ScheduleConfig::default().without_lunch();
        let entries = compute_schedule(&talks(&[i64::MAX, 10]), &cfg);
        assert_eq!(entries[0].end_min(), i64::MAX);
        assert_eq!(entries[1].end_min(), i64::MAX);
    }

    #[test]
    fn repeated_calls_agree() {
        let feed = talks(&[50, 45, 60, 30]);
        let cfg = ScheduleConfig::default();
        assert_eq!(compute_schedule(&feed, &cfg), compute_schedule(&feed, &cfg));
    }
}
