use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use psms_export::config::{Credentials, DEFAULT_OUTPUT_PATH, ExportConfig};
use psms_export::crawl::Crawler;
use psms_export::export::{ExportError, write_workbook};
use psms_export::logging;
use psms_export::psms::{FixtureApi, PlacementApi, PsmsClient, PsmsConfig, PsmsError};

/// Export the projects of every allotted placement station to a spreadsheet.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Account email used to log in
    #[arg(long, env = "PSMS_USERNAME")]
    username: String,

    /// Account password
    #[arg(long, env = "PSMS_PASSWORD", hide_env_values = true)]
    password: String,

    /// Spreadsheet to write (replaced if it exists)
    #[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Placement API base URL
    #[arg(long, env = "PSMS_BASE_URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Serve responses from a JSON fixture file instead of the live API
    #[arg(long)]
    fixtures: Option<PathBuf>,
}

impl Cli {
    fn export_config(&self) -> ExportConfig {
        ExportConfig::new(Credentials::new(&self.username, &self.password))
            .with_output_path(&self.output)
    }

    fn client_config(&self) -> PsmsConfig {
        let config = PsmsConfig::new().with_timeout(self.timeout_secs);
        match &self.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Psms(#[from] PsmsError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    println!("Script started");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), RunError> {
    let config = cli.export_config();

    match &cli.fixtures {
        Some(path) => {
            let api = FixtureApi::from_file(path)?;
            export(&api, &config).await
        }
        None => {
            let api = PsmsClient::new(cli.client_config())?;
            export(&api, &config).await
        }
    }
}

async fn export<A: PlacementApi>(api: &A, config: &ExportConfig) -> Result<(), RunError> {
    let crawler = Crawler::new(api, &config.credentials);
    let session = crawler.login().await.inspect_err(|e| {
        if e.is_login_failure() {
            error!(error = %e, "login failed, check the username and password");
        }
    })?;
    println!("Login successful!");

    println!("Scraping started");
    println!("Do not exit, scraping takes around 10-15 minutes depending on your internet speed");

    let report = crawler.crawl(&session).await;

    write_workbook(config.output_path(), &report.rows)?;

    println!("Data saved to {}", config.output_path().display());
    println!(
        "Failed to fetch data for station ids: {}",
        report.failed_list()
    );

    if !report.degradations.is_empty() {
        println!(
            "{} requests failed and were treated as empty:",
            report.degradations.len()
        );
        for degradation in &report.degradations {
            println!("  - {degradation}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::try_parse_from([
            "psms-export",
            "--username",
            "a@b.edu",
            "--password",
            "pw",
            "--output",
            "/tmp/x.xlsx",
            "--base-url",
            "http://localhost:9000/",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        let config = cli.export_config();
        assert_eq!(config.credentials.username, "a@b.edu");
        assert_eq!(config.output_path(), std::path::Path::new("/tmp/x.xlsx"));

        let client = cli.client_config();
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.timeout_secs, 5);
    }
}
