use crate::names::NameCase;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

pub use crate::export::{BodyStyle, RatingTags};

#[derive(Parser, Debug)]
#[command(name = "tournament-pgn")]
#[command(
    about = "Convert a tournament result spreadsheet into PGN game headers",
    long_about = None
)]
#[command(group(ArgGroup::new("language").args(["turkish", "english"])))]
pub struct Cli {
    /// Path to the spreadsheet (xlsx/xls/ods)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Path to the output PGN file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Use Turkish capitalization (default)
    #[arg(short, long)]
    pub turkish: bool,

    /// Use English capitalization
    #[arg(short, long)]
    pub english: bool,

    /// Rating tags to write (off/elo/ukd/both)
    #[arg(long)]
    pub rating_tags: Option<RatingTags>,

    /// Move text line under the headers (result/placeholder)
    #[arg(long)]
    pub body: Option<BodyStyle>,

    /// Config file (default: ~/.config/tournament-pgn/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the extracted tournament data as JSON
    #[arg(long)]
    pub dump: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn name_case(&self) -> NameCase {
        if self.english && !self.turkish {
            NameCase::Simple
        } else {
            NameCase::Turkish
        }
    }
}
