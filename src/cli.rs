use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate EPUB chapter files and tables of contents numbered in Traditional Chinese
#[derive(Parser, Debug)]
#[command(name = "zhchap", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the Chinese numeral for each value
    Numeral {
        /// Non-negative decimal integers, up to 73 digits each
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Write one XHTML file per line of the titles file
    Chapters {
        /// Number of the first chapter. Prompted for when omitted.
        #[arg(short, long)]
        start: Option<u64>,

        /// File with one chapter title per line
        #[arg(short, long, default_value = "chapter.txt")]
        titles: PathBuf,

        /// Directory the chapter files are written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Stylesheet href linked from every chapter
        #[arg(long, default_value = "../Styles/style.css")]
        stylesheet: String,
    },

    /// Write table-of-contents rows for an inclusive chapter range
    Toc {
        /// First chapter; 0 adds a prologue row. Prompted for when omitted.
        #[arg(short, long)]
        start: Option<u64>,

        /// Last chapter (>= start). Prompted for when omitted.
        #[arg(short, long)]
        end: Option<u64>,

        /// File the rows are written to
        #[arg(short, long, default_value = "content.txt")]
        output: PathBuf,

        /// Link text for the title column
        #[arg(long, default_value = "(章節標題)")]
        placeholder: String,
    },
}
