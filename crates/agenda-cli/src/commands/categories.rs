use agenda_core::{Agenda, Config};
use clap::Args;

use super::FeedArgs;

#[derive(Args)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub feed: FeedArgs,
    /// Output as JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CategoriesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let talks = args.feed.load(&config)?;
    let agenda = Agenda::new(talks, config.schedule_config());
    let categories = agenda.categories();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        for category in categories {
            println!("{category}");
        }
    }
    Ok(())
}
