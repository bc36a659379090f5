use clap::Subcommand;
use std::path::PathBuf;

pub mod entries;
pub mod execute;
pub mod files;
pub mod table;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rows of a delimited text file
    Table {
        /// Text file to parse
        file: PathBuf,

        /// Cell separator (a single character, or "\t")
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// List the translation files that would be loaded
    Files {
        /// Plugin directory (overrides the config)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// File extension without the dot (overrides the config)
        #[arg(short, long)]
        extension: Option<String>,
    },

    /// Print the entries admitted for a language, in load order
    Entries {
        /// Active language code (e.g. en, de, fr)
        #[arg(short, long)]
        language: String,

        /// Plugin directory (overrides the config)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Only show entries whose source text contains this string
        #[arg(long)]
        source: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
