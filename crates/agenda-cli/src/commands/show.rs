use agenda_core::{
    day_offset, format_clock, Agenda, AgendaView, Config, ScheduleConfig, ScheduleEntry,
    ValidationError,
};
use clap::Args;

use super::FeedArgs;

const NO_MATCHES: &str = "No talks found matching that category.";
const NO_TALKS: &str = "No talks scheduled.";
/// Column where titles and detail lines start.
const RANGE_WIDTH: usize = 21;
/// Padded width of the range itself; one column is kept for the separator.
const RANGE_PAD: usize = RANGE_WIDTH - 1;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub feed: FeedArgs,
    /// Only show talks with a category containing this text (case-insensitive)
    #[arg(short, long)]
    pub filter: Option<String>,
    /// Print the projected entries as JSON
    #[arg(long)]
    pub json: bool,
    /// Start of day, HH:MM (24-hour)
    #[arg(long, value_parser = agenda_core::parse_clock)]
    pub start: Option<i64>,
    /// Minutes between consecutive talks
    #[arg(long, allow_hyphen_values = true)]
    pub transition: Option<i64>,
    /// Lunch length in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub lunch: Option<i64>,
    /// 0-based index of the talk after which lunch is served
    #[arg(long, conflicts_with = "no_lunch")]
    pub lunch_after: Option<usize>,
    /// Do not insert a lunch break
    #[arg(long)]
    pub no_lunch: bool,
}

impl ShowArgs {
    /// Command-line overrides on top of the configured schedule rules.
    fn schedule_config(&self, base: ScheduleConfig) -> Result<ScheduleConfig, ValidationError> {
        let mut cfg = base;
        if let Some(start) = self.start {
            cfg.start_of_day = start;
        }
        if let Some(transition) = self.transition {
            cfg.transition_minutes = transition;
        }
        if let Some(lunch) = self.lunch {
            cfg.lunch_minutes = lunch;
        }
        if self.no_lunch {
            cfg.lunch_after_index = None;
        } else if let Some(index) = self.lunch_after {
            cfg.lunch_after_index = Some(index);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let schedule = args.schedule_config(config.schedule_config())?;
    let talks = args.feed.load(&config)?;
    let agenda = Agenda::new(talks, schedule);
    let view = agenda.view(args.filter.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

fn clock_label(minutes: i64) -> String {
    match day_offset(minutes) {
        0 => format_clock(minutes),
        days => format!("{} ({days:+}d)", format_clock(minutes)),
    }
}

fn range_label(entry: &ScheduleEntry) -> String {
    format!(
        "{} - {}",
        clock_label(entry.start_min()),
        clock_label(entry.end_min())
    )
}

/// Plain-text layout of a projected view.
pub fn render_text(view: &AgendaView<'_>) -> String {
    if view.is_empty() {
        let message = if view.is_filtered() { NO_MATCHES } else { NO_TALKS };
        return format!("{message}\n");
    }

    let indent = " ".repeat(RANGE_WIDTH);
    let mut out = String::new();
    for entry in &view.entries {
        let range = range_label(entry);
        match entry {
            ScheduleEntry::Talk { talk, .. } => {
                out.push_str(&format!("{range:<RANGE_PAD$} {}\n", talk.title));
                if !talk.speakers.is_empty() {
                    out.push_str(&format!("{indent}by {}\n", talk.speaker_line()));
                }
                if !talk.categories.is_empty() {
                    let tags: Vec<String> =
                        talk.categories.iter().map(|c| format!("[{c}]")).collect();
                    out.push_str(&format!("{indent}{}\n", tags.join(" ")));
                }
                if !talk.description.is_empty() {
                    out.push_str(&format!("{indent}{}\n", talk.description));
                }
            }
            ScheduleEntry::Break { label, .. } => {
                out.push_str(&format!("{range:<RANGE_PAD$} == {label} ==\n"));
            }
        }
        out.push('\n');
    }
    out
}
