//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};

/// pagesplit - Split page_content blobs into id/question/answer fields.
#[derive(Debug, Parser)]
#[command(name = "pagesplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process a custom skill request envelope and print the response
    Process(ProcessArgs),

    /// Extract a single field from a text blob
    Extract(ExtractArgs),
}

/// Where to read input from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Read input from this file
    #[arg(short, long)]
    pub file: Option<String>,

    /// Read input from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,

    /// Extractor settings (TOML with optional max_content_length)
    #[arg(short, long, env = "PAGESPLIT_EXTRACTOR_CONFIG")]
    pub config: Option<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Field to extract
    #[arg(short, long, value_enum)]
    pub label: LabelArg,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Field label argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelArg {
    /// `id:` segment
    Id,
    /// `question:` segment
    Question,
    /// `answer:` segment
    Answer,
}

impl From<LabelArg> for pagesplit_domain::FieldLabel {
    fn from(label: LabelArg) -> Self {
        match label {
            LabelArg::Id => pagesplit_domain::FieldLabel::Id,
            LabelArg::Question => pagesplit_domain::FieldLabel::Question,
            LabelArg::Answer => pagesplit_domain::FieldLabel::Answer,
        }
    }
}
