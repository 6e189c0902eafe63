use abuseipdb_routeros::config::{Config, Mode};
use abuseipdb_routeros::error::BlocklistError;
use abuseipdb_routeros::{run_collapse, run_render};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::process::ExitCode;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

#[derive(Parser)]
#[command(name = "abuseipdb-routeros")]
#[command(version, about = "Render AbuseIPDB IPv4 block lists as RouterOS address-list scripts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Render data/<list>-collapsed.ipv4, entries expire after TIMEOUT days (default)
    File,
    /// Fetch the list over HTTP and render it without expiry
    Http,
    /// Download the upstream list and write data/<list>-collapsed.ipv4
    Collapse,
}

impl From<Command> for Mode {
    fn from(command: Command) -> Mode {
        match command {
            Command::File => Mode::File,
            Command::Http => Mode::Http,
            Command::Collapse => Mode::Collapse,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    init_logging();
    dotenv::dotenv().ok();
    log::debug!("#Start main()");

    let mode = cli.command.map(Mode::from).unwrap_or(Mode::File);
    match run(mode).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(mode: Mode) -> Result<(), BlocklistError> {
    let config = Config::from_env(mode)?;
    match mode {
        Mode::Collapse => {
            run_collapse(&config).await?;
        }
        Mode::File | Mode::Http => {
            run_render(&config).await?;
        }
    }
    Ok(())
}

/// Use log4rs.yml when present, otherwise plain info logging to stdout.
fn init_logging() {
    let Err(file_err) = log4rs::init_file(LOG_CONFIG_FILE, Default::default()) else {
        return;
    };

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info));
    match config {
        Ok(config) => {
            if log4rs::init_config(config).is_ok() {
                log::debug!("{LOG_CONFIG_FILE} not used: {file_err}");
            }
        }
        Err(e) => eprintln!("Error initializing log4rs: {e}"),
    }
}
