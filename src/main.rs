use clap::Parser;
use tracing_subscriber::EnvFilter;
use tweak_urgency::cli::commands::Cli;
use tweak_urgency::cli::handlers;

/// Log filter variable, e.g. TWEAK_URGENCY_LOG=debug
const LOG_ENV: &str = "TWEAK_URGENCY_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
