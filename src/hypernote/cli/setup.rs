use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hypernote", bin_name = "hypernote", version)]
#[command(about = "Note command interpreter and positional list retrieval", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Config file [default: <config dir>/hypernote/hypernote.toml]
    #[arg(short, long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpret a raw input line (hyper command, tag command or plain text)
    #[command(alias = "p")]
    Parse {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Extract lists from a note body (file or stdin)
    #[command(alias = "l")]
    Lists { file: Option<PathBuf> },

    /// Answer a positional question from a JSON notes file
    #[command(alias = "a")]
    Ask {
        question: String,

        /// JSON array of {"title", "content"} objects
        #[arg(short, long)]
        notes: PathBuf,
    },

    /// Print the effective configuration
    Config,
}
