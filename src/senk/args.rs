use clap::{Args, Parser, Subcommand, ValueEnum};
use senk::api::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "senk", version)]
#[command(about = "Keyboard-driven outline notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new, empty note
    #[command(alias = "n")]
    New {
        /// Id of the note (a UUID is generated when omitted)
        id: Option<String>,
    },

    /// List notes, most recently edited first
    #[command(alias = "ls")]
    List,

    /// Show a note as an outline
    #[command(alias = "v")]
    Show {
        id: String,

        /// Prefix each line with its index
        #[arg(short = 'n', long)]
        numbers: bool,
    },

    /// Apply an editing command to one line of a note
    Apply {
        id: String,

        /// navigate-up, navigate-down, navigate-left, navigate-right, move-up,
        /// move-down, split, merge-with-previous, indent or outdent
        command: String,

        #[command(flatten)]
        caret: CaretArgs,

        /// Hold ctrl (split keeps the text, merge drops all indent)
        #[arg(long)]
        ctrl: bool,
    },

    /// Press a key on one line of a note (e.g. enter, ctrl+up, shift+tab)
    Key {
        id: String,

        key: String,

        #[command(flatten)]
        caret: CaretArgs,
    },

    /// Replace the text of one line
    Set {
        id: String,

        index: usize,

        text: String,
    },

    /// Import a plain-text outline file into a note
    Import { id: String, file: String },

    /// Export a note
    Export {
        id: String,

        #[arg(short, long, value_enum, default_value_t = ExportArg::Text)]
        format: ExportArg,
    },

    /// Delete a note permanently
    #[command(alias = "rm")]
    Delete { id: String },

    /// Print the file path of a note
    Path { id: String },

    /// Get or set configuration
    Config {
        /// Configuration key (file-ext, bullet, indent-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Focused line and selection inside it.
#[derive(Args, Debug, Clone, Copy)]
pub struct CaretArgs {
    /// Index of the focused line
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Selection start (char offset)
    #[arg(short, long, default_value_t = 0)]
    pub start: usize,

    /// Selection end (defaults to the start)
    #[arg(short, long)]
    pub end: Option<usize>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ExportArg {
    Text,
    Html,
    Json,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Text => ExportFormat::Text,
            ExportArg::Html => ExportFormat::Html,
            ExportArg::Json => ExportFormat::Json,
        }
    }
}
