mod config;
mod domain;
mod error;
mod lookup;
mod model;
mod report;
mod scan;
mod state;

pub use error::{Error, Result};

use clap::{Arg, ArgAction, Command};
use config::ScanConfig;
use domain::Domain;
use lookup::{Lookup, SubdomainApi};
use state::ScanSession;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Command::new(clap::crate_name!())
        .version(clap::crate_version!())
        .subcommand(
            Command::new("scan")
                .about("Look up the subdomains of a domain")
                .arg(
                    Arg::new("target")
                        .help("The domain name to scan (interactive session when omitted)")
                        .value_name("TARGET")
                        .index(1),
                )
                .arg(
                    Arg::new("logs")
                        .short('s')
                        .long("logs")
                        .action(ArgAction::SetTrue)
                        .help("Save logs into a .log file"),
                )
                .arg(
                    Arg::new("json")
                        .short('j')
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the raw result envelope as JSON"),
                ),
        )
        .arg_required_else_help(true)
        .get_matches();

    match cli.subcommand() {
        Some(("scan", args)) => {
            if args.get_flag("logs") {
                let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
                let log_dir = Path::new("logs");
                ensure_dir(log_dir)?;
                init_tracing_subscriber(Some((log_dir, format!("{}.log", timestamp))));
            } else {
                init_tracing_subscriber(None);
            }

            let config = ScanConfig::from_env();
            let api = SubdomainApi::new()?;
            let as_json = args.get_flag("json");

            match args.get_one::<String>("target") {
                Some(target) => scan_once(&config, &api, target, as_json).await,
                None => run_session(&config, &api, as_json).await,
            }
        }

        // fallback if a cmd is not handled (should not be possible)
        _ => {
            error!("{:12} - Command not handled, exit program", "CLI ERROR");
            Err(Error::CliUsage("Command not handled".into()))
        }
    }
}

// one submission, outcome rendered and reflected in the exit status
async fn scan_once(
    config: &ScanConfig,
    lookup: &impl Lookup,
    target: &str,
    as_json: bool,
) -> Result<()> {
    // pre-submit gate, the same check the orchestrator re-applies
    let domain = match Domain::parse(target) {
        Ok(domain) => domain,
        Err(err) => {
            println!("{}", err.user_message());
            return Err(Error::CliUsage(format!("invalid target {:?}", target)));
        }
    };

    let mut session = ScanSession::new();
    session.begin(&domain);
    if !as_json {
        report::render_state(session.state());
    }

    info!("Scanning {}", domain);
    let result = scan::scan(config, lookup, domain.as_str()).await;

    session.complete(result.clone());
    if as_json {
        report::render_json(&result)?;
    } else {
        report::render_state(session.state());
        if let Some(toast) = session.toast() {
            report::render_toast(&toast);
        }
    }

    Ok(())
}

// reads submissions from stdin until EOF, `exit` or `quit`
async fn run_session(config: &ScanConfig, lookup: &impl Lookup, as_json: bool) -> Result<()> {
    let mut session = ScanSession::new();
    if !as_json {
        report::render_state(session.state());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // prompt on stderr, stdout carries only scan output
        eprint!("domain> ");

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        if line == "exit" || line == "quit" {
            break;
        }

        // pre-submit gate, the message surfaces inline and the state
        // machine is left untouched
        let domain = match Domain::parse(&line) {
            Ok(domain) => domain,
            Err(err) => {
                println!("{}", err.user_message());
                continue;
            }
        };

        if !session.begin(&domain) {
            continue;
        }
        if !as_json {
            report::render_state(session.state());
        }

        info!("Scanning {}", domain);
        let result = scan::scan(config, lookup, domain.as_str()).await;

        session.complete(result.clone());
        if as_json {
            report::render_json(&result)?;
        } else {
            report::render_state(session.state());
            if let Some(toast) = session.toast() {
                report::render_toast(&toast);
            }
        }
    }

    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        Ok(false)
    } else {
        fs::create_dir_all(dir)?;
        Ok(true)
    }
}

fn init_tracing_subscriber(log_file: Option<(&Path, String)>) {
    // base for the subscriber
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE);

    if let Some((log_dir, filename)) = log_file {
        let file_appender = RollingFileAppender::new(Rotation::NEVER, log_dir, filename);
        let subscriber = subscriber
            .with_ansi(false)
            .with_file(false)
            .with_target(false)
            .with_writer(file_appender)
            .finish();

        // add log in terminal as an additional layer
        let stdout_layer = layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(true)
            .with_file(false)
            .with_target(false);

        tracing::subscriber::set_global_default(subscriber.with(stdout_layer))
            .expect("Unable to set global subscriber with 2 layers");
    } else {
        let subscriber = subscriber
            .with_ansi(true)
            .with_file(false)
            .with_target(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("Unable to set global subscriber");
    }
}
