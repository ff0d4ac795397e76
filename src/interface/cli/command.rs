//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::run::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "prmetrics")]
#[command(about = "Keep the size/test metrics comment on an Azure Repos pull request current")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pull request URL
    url: Option<String>,

    /// Code metrics JSON produced by the size calculator
    #[arg(long, value_name = "FILE")]
    metrics: Option<PathBuf>,

    /// Iteration to report (defaults to the latest one)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    iteration: Option<u64>,

    /// Read existing threads from a JSON file instead of the API (implies --dry-run)
    #[arg(long, value_name = "FILE")]
    threads_file: Option<PathBuf>,

    /// Override the small pull request threshold
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    base_size: Option<u64>,

    /// Print planned changes and the rendered comment, do not post
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config
    Config,
}

pub enum CliAction {
    InspectConfig,
    Update(RunOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        if let Some(Commands::Config) = self.command {
            return Ok(CliAction::InspectConfig);
        }

        let Some(metrics_file) = self.metrics else {
            return Err("--metrics <FILE> is required".to_string());
        };

        match (&self.url, &self.threads_file) {
            (None, None) => {
                return Err("a pull request URL or --threads-file is required".to_string());
            }
            (Some(_), Some(_)) => {
                return Err("pass either a pull request URL or --threads-file, not both".to_string());
            }
            (None, Some(_)) if self.iteration.is_none() => {
                return Err("--threads-file requires --iteration".to_string());
            }
            _ => {}
        }

        let dry_run = self.dry_run || self.threads_file.is_some();
        Ok(CliAction::Update(RunOptions {
            url: self.url,
            threads_file: self.threads_file,
            metrics_file,
            iteration: self.iteration,
            base_size: self.base_size,
            dry_run,
        }))
    }
}
