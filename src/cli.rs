use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::CrossFieldMode;

#[derive(Parser, Debug)]
#[command(
    name = "hfqa",
    version,
    about = "Quality scoring and vocabulary checks for heat-flow database tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Score(ScoreArgs),
    Check(CheckArgs),
    Assess(AssessArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    #[arg(long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub cross_field_mode: Option<CrossFieldMode>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}
