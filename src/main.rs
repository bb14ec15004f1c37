use std::env;
use std::process::ExitCode;

use stock_settings::config::{LoggingConfig, Settings, dotenv};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn parse_env_file() -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix("--env-file=").map(str::to_string))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.tracing_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    let loaded = match parse_env_file() {
        Some(path) => dotenv::load_from(path),
        None => dotenv::load(),
    };
    let loaded = match loaded {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Failed to load env file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = Settings::from_env();

    if env::args().any(|arg| arg == "--print") {
        return match settings.to_yaml() {
            Ok(yaml) => {
                print!("{}", yaml);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    init_tracing(&settings.logging);

    if let Some(path) = loaded {
        info!(path = %path.display(), "Env file loaded");
    }

    settings.log_summary();
    for warning in settings.warnings() {
        warn!("{}", warning);
    }

    ExitCode::SUCCESS
}
