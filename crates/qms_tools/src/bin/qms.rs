#![forbid(unsafe_code)]

use std::env;
use std::io::{self, IsTerminal, Read};

use chrono::Utc;
use qms_engines::GovernanceConfig;
use qms_tools::governance_cli::execute_governance_command;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "QMS_LOG";

fn main() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let stdin_json = if args.first().map(String::as_str) == Some("access") {
        read_stdin_json()?
    } else {
        None
    };
    let config = GovernanceConfig::from_env();
    let output = execute_governance_command(&config, &args, Utc::now(), stdin_json.as_deref())?;
    println!("{output}");
    Ok(())
}

fn read_stdin_json() -> Result<Option<String>, String> {
    if io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| e.to_string())?;
    Ok(Some(input))
}
