use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use marketlens::tui;
use marketlens::{AnalysisService, AnalyzeProductUseCase, HttpAnalysisClient, MockAnalysisClient};

#[derive(Parser)]
#[command(name = "marketlens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the analysis service (overrides ANALYZE_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Use the offline mock analysis service instead of the HTTP collaborator.
    #[arg(long)]
    mock: bool,

    /// Directory for log files (the alternate screen hides stderr).
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Also log to stderr.
    #[arg(long)]
    log_to_stderr: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = tui::init_tracing(&cli.log_dir, cli.log_to_stderr, cli.verbose)?;

    let service: Arc<dyn AnalysisService> = if cli.mock {
        info!("Using mock analysis service");
        Arc::new(MockAnalysisClient::new())
    } else {
        let client = match cli.base_url {
            Some(base) => HttpAnalysisClient::new(base),
            None => HttpAnalysisClient::from_env(),
        };
        info!("Using analysis service at {}", client.base_url());
        Arc::new(client)
    };

    let use_case = Arc::new(AnalyzeProductUseCase::new(service));

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run(&mut terminal, use_case).await;
    tui::restore_terminal(&mut terminal)?;

    result
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn mock_and_base_url_flags_parse() {
        let cli = Cli::try_parse_from(["marketlens", "--mock", "--base-url", "http://svc:9000"])
            .expect("flags should parse");

        assert!(cli.mock);
        assert_eq!(cli.base_url.as_deref(), Some("http://svc:9000"));
    }

    #[test]
    fn defaults_require_no_arguments() {
        let cli = Cli::try_parse_from(["marketlens"]).expect("defaults should parse");

        assert!(!cli.mock);
        assert!(cli.base_url.is_none());
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }
}
