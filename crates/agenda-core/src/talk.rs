//! Talk records as supplied by the talk feed.

use serde::{Deserialize, Serialize};

/// A single talk on the agenda.
///
/// Talks are immutable input. Their identity is their position in the feed,
/// which is also their position on the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    pub speakers: Vec<String>,
    /// Membership matters for filtering; order is for display only.
    pub categories: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Duration in minutes.
    pub duration: i64,
}

impl Talk {
    /// Create a talk with no speakers, categories or description.
    pub fn new(title: impl Into<String>, duration: i64) -> Self {
        Self {
            title: title.into(),
            speakers: Vec::new(),
            categories: Vec::new(),
            description: String::new(),
            duration,
        }
    }

    pub fn with_speakers<I, S>(mut self, speakers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.speakers = speakers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Speakers joined for display, e.g. `"Ada & Grace"`.
    pub fn speaker_line(&self) -> String {
        self.speakers.join(" & ")
    }
}
