pub mod categories;
pub mod config;
pub mod show;

use agenda_core::{validate_talks, Config, Talk, TalkSource};
use clap::Args;

/// Where to read talks from.
#[derive(Args)]
pub struct FeedArgs {
    /// Talk feed: a JSON file path or an http(s) URL (default: config, then talks.json)
    #[arg(short, long)]
    pub talks: Option<String>,
    /// Reject talks with a blank title or a non-positive duration
    #[arg(long)]
    pub strict: bool,
}

impl FeedArgs {
    pub fn source(&self, config: &Config) -> Result<TalkSource, Box<dyn std::error::Error>> {
        Ok(match self.talks.as_deref() {
            Some(location) => TalkSource::parse(location)?,
            None => config.talk_source()?,
        })
    }

    /// Load the whole feed. URL feeds run on a throwaway current-thread runtime.
    pub fn load(&self, config: &Config) -> Result<Vec<Talk>, Box<dyn std::error::Error>> {
        let source = self.source(config)?;
        tracing::debug!(%source, strict = self.strict, "loading talk feed");
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let talks = runtime.block_on(source.load())?;
        if self.strict {
            validate_talks(&talks)?;
        }
        Ok(talks)
    }
}
