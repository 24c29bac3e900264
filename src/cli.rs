use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "viability",
    version,
    about = "Is my startup viable? Seven questions, one verdict"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the questions and their numbered options
    Questions(OutputArgs),
    /// List the built-in example answer sets
    Examples(OutputArgs),
    /// Score one set of answers
    Score(ScoreArgs),
    /// Answer questions one at a time from stdin
    Session(SessionArgs),
    /// Write a default viability.toml in the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    /// QUESTION=OPTION, by key or 1-based number; OPTION may be a label or `none`
    #[arg(short, long = "answer", value_name = "QUESTION=OPTION")]
    pub answers: Vec<String>,
    /// Fill every answer from a named example before applying --answer
    #[arg(long)]
    pub example: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    /// The startup idea in one sentence
    #[arg(long)]
    pub idea: Option<String>,
    /// Also write the rendered report to the configured export directory
    #[arg(long)]
    pub export: bool,
}

#[derive(Debug, Args, Clone)]
pub struct SessionArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
