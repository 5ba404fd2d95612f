use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use timeoff_tester::driver::{WebDriver, WebDriverConfig};
use timeoff_tester::runner;

#[derive(Parser)]
#[command(name = "timeoff-tester")]
#[command(version)]
#[command(about = "Automated smoke tests for the TimeOff Tracker web application", long_about = None)]
struct Cli {
    /// Base URL of the application; view fragments (#dashboard, #settings,
    /// ...) are appended to it. Defaults to index.html in the current
    /// directory.
    base_url: Option<String>,

    /// WebDriver endpoint to connect to
    #[arg(long, default_value = "http://localhost:9515")]
    webdriver_url: String,

    /// Report file path (overwritten on every run)
    #[arg(short, long, default_value = "test_results.json")]
    output: PathBuf,

    /// Run with a visible browser window instead of headless
    #[arg(long, default_value = "false")]
    headed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let base_url = match cli.base_url {
        Some(url) => url,
        None => default_base_url()?,
    };

    let config = WebDriverConfig {
        webdriver_url: cli.webdriver_url,
        headless: !cli.headed,
        ..WebDriverConfig::default()
    };

    // Session creation is the only fatal failure; once tests are running,
    // failed checks are data, not a process failure.
    let driver = match WebDriver::new(&config).await {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!(
                "{} Failed to initialize WebDriver: {:#}",
                "✗".red().bold(),
                e
            );
            std::process::exit(1);
        }
    };
    println!("{} WebDriver initialized successfully", "✓".green().bold());

    println!("Starting TimeOff Tracker feature tests...");
    println!("  Target: {}", base_url.cyan());
    println!("  Report: {}", cli.output.display().to_string().cyan());

    if let Err(e) = runner::run_all_tests(&driver, &base_url, &cli.output).await {
        log::error!("session teardown failed: {:#}", e);
    }

    Ok(())
}

/// Default target: index.html in the current directory
fn default_base_url() -> anyhow::Result<String> {
    let cwd = std::env::current_dir()?;
    Ok(format!("file://{}", cwd.join("index.html").display()))
}
