use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "WTT players grid")]
pub struct Cli {
    /// Use bundled fallback data only, never call the WTT APIs
    #[arg(long, global = true)]
    pub offline: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the players of a category, grouped by draw
    Players {
        /// Category key, e.g. mens_singles or mixed_doubles
        #[arg(short, long, default_value = "all_players")]
        category: String,
        /// Draw to show when the category has several (defaults to the main draw)
        #[arg(short, long)]
        draw: Option<String>,
    },
    /// List the sub-events of the configured event
    SubEvents,
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}
