use docsync::cli::commands::{CliArgs, Commands};
use docsync::cli::handlers::{handle_activate, handle_status};
use docsync::util::logging::{self, LoggingConfig};
use docsync::VERSION;

use clap::Parser;
use tracing::{debug, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("docsync v{} starting", VERSION);

    let exit_code = match &args.command {
        Commands::Activate(activate_args) => handle_activate(activate_args).await,
        Commands::Status(status_args) => handle_status(status_args).await,
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    if let Some(level_str) = &args.log_level {
        logging::init_logging(LoggingConfig::with_level(logging::parse_level(level_str)));
    } else if args.verbose {
        logging::init_logging(LoggingConfig::with_level(Level::DEBUG));
    } else if args.quiet {
        logging::init_logging(LoggingConfig::with_level(Level::ERROR));
    } else {
        logging::init_from_env();
    }
}
