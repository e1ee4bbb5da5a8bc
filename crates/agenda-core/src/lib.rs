//! # Agenda Core Library
//!
//! This library provides the core logic for rendering a single-track
//! conference agenda. It follows a CLI-first philosophy: the `agenda`
//! binary is a thin rendering layer over the same library.
//!
//! ## Architecture
//!
//! - **Schedule Calculator**: assigns every talk a time slot by accumulating
//!   durations and transition gaps from a start-of-day anchor, inserting one
//!   lunch break
//! - **View Projector**: filters the computed schedule by category text
//!   without touching the slots; the break is hidden while filtering
//! - **Talk Feed**: loads the talk list from a JSON file or URL
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`compute_schedule`]: the calculator
//! - [`project`]: the projector
//! - [`format_clock`]: 12-hour display of minutes-from-midnight
//! - [`Agenda`]: immutable snapshot of feed, config and schedule
//! - [`Config`]: application configuration management

pub mod agenda;
pub mod clock;
pub mod error;
pub mod feed;
pub mod schedule;
pub mod storage;
pub mod talk;
pub mod view;

pub use agenda::{Agenda, AgendaView};
pub use clock::{day_offset, format_clock, format_time_range, parse_clock};
pub use error::{ConfigError, CoreError, ValidationError};
pub use feed::{fetch_talks, load_talks, parse_talks, validate_talks, TalkSource};
pub use schedule::{compute_schedule, ScheduleConfig, ScheduleEntry, LUNCH_LABEL};
pub use storage::Config;
pub use talk::Talk;
pub use view::{project, CategoryFilter};
