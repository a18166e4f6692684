use clap::{Parser, ValueEnum};
use log::LevelFilter;
use poi_lookup::logging::init_logger;
use poi_lookup::poi::{ClientConfig, PoiClient, DEFAULT_API_BASE, DEFAULT_USER_AGENT};
use poi_lookup::report::{render_failure, render_json, render_report};
use std::time::Duration;

/// Resolve a Douyin POI share link and print the place's details.
///
/// Examples:
///   poi-lookup https://v.douyin.com/jSthVy0Jn-g/
///   poi-lookup "https://v.douyin.com/jSthVy0Jn-g/ 1@0.com"
///   poi-lookup --poi-id 6601129423558574093 --json
#[derive(Parser)]
#[command(name = "poi-lookup", version, about, long_about = None)]
struct Cli {
    /// Short share URL. Anything after the first whitespace is ignored,
    /// so pasted share text works as-is.
    #[arg(required_unless_present = "poi_id", conflicts_with = "poi_id")]
    url: Option<String>,

    /// Skip link resolution and fetch this POI identifier directly.
    #[arg(long)]
    poi_id: Option<String>,

    /// Origin of the detail API.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Per-request timeout in seconds. Unset waits indefinitely.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// User-Agent header sent with both requests.
    #[arg(long, default_value = DEFAULT_USER_AGENT, hide_default_value = true)]
    user_agent: String,

    /// Print the lookup as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log level for stderr diagnostics.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.log_level.into()) {
        eprintln!("Warning: logger not initialized: {}", e);
    }

    let client = PoiClient::new(ClientConfig {
        api_base: cli.api_base.clone(),
        user_agent: cli.user_agent.clone(),
        timeout: cli.timeout.map(Duration::from_secs),
    });

    let result = match (&cli.poi_id, &cli.url) {
        (Some(id), _) => client.lookup_id(id),
        (None, Some(url)) => client.lookup(url),
        (None, None) => unreachable!("clap requires a URL or --poi-id"),
    };

    let lookup = match result {
        Ok(lookup) => lookup,
        Err(e) => {
            println!("{}", render_failure(&e));
            std::process::exit(1);
        }
    };

    if cli.json {
        match render_json(&lookup) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                println!("Failed to encode result as JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_report(&lookup));
    }
}
