use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "docsync",
    version,
    about = "Client tooling for the docsync realtime document service"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a client against a sync server and report the assigned id
    Activate(ActivateArgs),

    /// Print the resolved configuration
    Status(StatusArgs),
}

#[derive(Debug, Args)]
pub struct ActivateArgs {
    /// Server address (http://, https://, tcp:// or unix://); falls back
    /// to DOCSYNC_ADDR
    #[arg(long)]
    pub addr: Option<String>,

    /// Client key; a random UUID when omitted
    #[arg(long)]
    pub key: Option<String>,

    /// Leave the client registered instead of deactivating before exit
    #[arg(long)]
    pub keep: bool,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}
