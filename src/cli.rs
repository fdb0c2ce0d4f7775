use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "quizextract",
    version,
    about = "Extract normalized question records from AI-generated quiz responses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// File holding the raw AI response (HTML fragment or plain text).
    #[arg(long)]
    pub response_path: PathBuf,

    /// JSON array of the originally uploaded questions.
    #[arg(long)]
    pub questions_path: PathBuf,

    #[arg(long, default_value = "Multiple Choice Question")]
    pub format: String,

    #[arg(long, default_value = "English")]
    pub language: String,

    /// Write the record array here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Candidate index shift tried first when merging true/false questions.
    #[arg(long, default_value_t = 0)]
    pub true_false_offset: usize,
}
