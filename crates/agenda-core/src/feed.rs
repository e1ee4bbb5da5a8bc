//! Talk feed loading.
//!
//! The feed is a JSON array of talk records, read from a file or fetched
//! over HTTP. It is loaded once, in full, before any schedule is computed;
//! a failed load is terminal and the calculator never sees partial data.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;
use url::Url;

use crate::error::{CoreError, Result, ValidationError};
use crate::talk::Talk;

/// Feed file used when neither the command line nor the config names one.
pub const DEFAULT_TALKS_FILE: &str = "talks.json";

/// Where the talk feed comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalkSource {
    File(PathBuf),
    Url(Url),
}

impl TalkSource {
    /// `http://` and `https://` locations are URLs; anything else is a path.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Feed`] if an http(s) location is not a valid URL.
    pub fn parse(location: &str) -> Result<Self> {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(location).map_err(|e| CoreError::Feed {
                source_name: location.to_string(),
                message: e.to_string(),
            })?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::File(PathBuf::from(location)))
        }
    }

    /// Load the full feed from this source.
    pub async fn load(&self) -> Result<Vec<Talk>> {
        match self {
            Self::File(path) => load_talks(path),
            Self::Url(url) => fetch_talks(url).await,
        }
    }
}

impl Default for TalkSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_TALKS_FILE))
    }
}

impl fmt::Display for TalkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Parse a JSON array of talk records.
pub fn parse_talks(json: &str) -> Result<Vec<Talk>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a feed file.
///
/// # Errors
///
/// Returns [`CoreError::Feed`] naming the file if it cannot be read or is
/// not a valid talk array.
pub fn load_talks(path: &Path) -> Result<Vec<Talk>> {
    let feed_error = |message: String| CoreError::Feed {
        source_name: path.display().to_string(),
        message,
    };
    let content = std::fs::read_to_string(path).map_err(|e| feed_error(e.to_string()))?;
    let talks = parse_talks(&content).map_err(|e| feed_error(e.to_string()))?;
    info!(path = %path.display(), talks = talks.len(), "loaded talk feed");
    Ok(talks)
}

/// Fetch and parse a feed over HTTP.
///
/// # Errors
///
/// Returns [`CoreError::Http`] on transport or body decoding failure and
/// [`CoreError::Feed`] on a non-success status.
pub async fn fetch_talks(url: &Url) -> Result<Vec<Talk>> {
    let resp = reqwest::Client::new().get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(CoreError::Feed {
            source_name: url.to_string(),
            message: format!("HTTP {status}"),
        });
    }
    let talks: Vec<Talk> = resp.json().await?;
    info!(%url, talks = talks.len(), "fetched talk feed");
    Ok(talks)
}

/// Opt-in check for feeds that are not trusted.
///
/// The calculator accepts any durations; call this first when the feed may
/// contain zero or negative durations or untitled talks.
///
/// # Errors
///
/// Returns the first problem found, in feed order.
pub fn validate_talks(talks: &[Talk]) -> Result<(), ValidationError> {
    for (index, talk) in talks.iter().enumerate() {
        if talk.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle { index });
        }
        if talk.duration <= 0 {
            return Err(ValidationError::NonPositiveDuration {
                index,
                title: talk.title.clone(),
                duration: talk.duration,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_parse_detects_urls() {
        assert!(matches!(
            TalkSource::parse("https://example.com/talks.json").unwrap(),
            TalkSource::Url(_)
        ));
        assert!(matches!(
            TalkSource::parse("HTTP://example.com/talks.json").unwrap(),
            TalkSource::Url(_)
        ));
        assert_eq!(
            TalkSource::parse("data/talks.json").unwrap(),
            TalkSource::File(PathBuf::from("data/talks.json"))
        );
    }

    #[test]
    fn source_parse_rejects_broken_url() {
        assert!(matches!(
            TalkSource::parse("http://"),
            Err(CoreError::Feed { .. })
        ));
    }

    #[test]
    fn default_source_is_talks_json() {
        assert_eq!(TalkSource::default().to_string(), "talks.json");
    }

    #[test]
    fn parse_talks_reads_array() {
        let json = r#"[
            {"title": "A", "speakers": ["X"], "categories": ["Rust"], "description": "", "duration": 50},
            {"title": "B", "speakers": [], "categories": [], "description": "d", "duration": 45}
        ]"#;
        let talks = parse_talks(json).unwrap();
        assert_eq!(talks.len(), 2);
        assert_eq!(talks[1].duration, 45);
    }

    #[test]
    fn parse_talks_rejects_non_array() {
        assert!(matches!(parse_talks("{}"), Err(CoreError::Json(_))));
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let err = load_talks(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn validate_accepts_good_feed() {
        let talks = vec![Talk::new("A", 30), Talk::new("B", 1)];
        assert!(validate_talks(&talks).is_ok());
    }

    #[test]
    fn validate_flags_non_positive_duration() {
        let talks = vec![Talk::new("A", 30), Talk::new("B", 0)];
        assert_eq!(
            validate_talks(&talks),
            Err(ValidationError::NonPositiveDuration {
                index: 1,
                title: "B".to_string(),
                duration: 0,
            })
        );
    }

    #[test]
    fn validate_flags_blank_title() {
        let talks = vec![Talk::new("  ", 30)];
        assert_eq!(
            validate_talks(&talks),
            Err(ValidationError::EmptyTitle { index: 0 })
        );
    }
}
