use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "huomao",
    version,
    about = "Turns the Huomao live-channel directory into a playable .pls playlist"
)]
pub struct Args {
    /// Game category to list channels for
    #[arg(short, long)]
    pub game: Option<String>,

    /// Results page to fetch
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Write the playlist to this path instead of the temp directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the playlist to stdout instead of writing a file
    #[arg(long)]
    pub print: bool,

    /// Generate the playlist but do not launch the player
    #[arg(long)]
    pub no_play: bool,

    /// Path to a config file (default: <config dir>/huomao/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["huomao"]);
        assert_eq!(args.page, 1);
        assert!(args.game.is_none());
        assert!(!args.no_play);
        assert!(!args.print);
    }
}
