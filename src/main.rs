use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use email_list_cleaner::config::CleanerConfig;
use email_list_cleaner::input;
use email_list_cleaner::models::CleaningReport;
use email_list_cleaner::pipeline::EmailListCleaner;
use email_list_cleaner::validation::dnsmx::SystemMxResolver;

#[derive(Parser, Debug)]
#[command(
    name = "email-list-cleaner",
    about = "Clean an email list: validate, drop spam traps and dead domains, deduplicate",
    version,
    long_about = None
)]
struct Args {
    /// Path to the email list (defaults to ~/Documents/Email Cleaner/emails.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the report as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    setup_logging(args.verbose);

    let path = match args.input {
        Some(path) => path,
        None => input::default_input_path().context("failed to locate the default email list")?,
    };

    // Checked precondition: a missing list is reported, not raised.
    if !path.exists() {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("File '{file_name}' not found in the specified directory.");
        return Ok(());
    }

    let emails = input::read_emails(&path)
        .with_context(|| format!("failed to read email list from {}", path.display()))?;

    let config = CleanerConfig::from_env();
    let resolver =
        SystemMxResolver::new(&config).context("failed to initialize the DNS resolver")?;
    let cleaner = EmailListCleaner::new(resolver);

    let report = cleaner.clean(&emails);

    if args.json {
        print_json_report(&report)?;
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &CleaningReport) {
    println!("Cleaned Email List:");
    for email in &report.cleaned {
        println!("{email}");
    }

    println!();
    println!("Total cleaned emails: {}", report.cleaned_count);
    println!("Invalid emails: {}", report.invalid_count);
    println!("Inactive emails: {}", report.inactive_count);
    println!("Spam trap emails: {}", report.spam_trap_count);
}

fn print_json_report(report: &CleaningReport) -> Result<()> {
    let payload = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
