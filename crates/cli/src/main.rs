//! SmartTask CLI - in-memory task tracker.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod demo;
mod menu;

use menu::{MenuApp, MenuConfig};

#[derive(Parser)]
#[command(name = "smarttask")]
#[command(about = "In-memory task tracker with a text menu", long_about = None)]
struct Cli {
    /// Log filter, e.g. "info" or "smarttask_work=debug"
    #[arg(long, env = "SMARTTASK_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Menu,
    /// Walk through routine and urgent tasks side by side
    Demo {
        /// Print the resulting tasks and statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(filter: &str) {
    // Menu output owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            info!("Starting SmartTask menu");
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut app = MenuApp::new(stdin.lock(), stdout.lock(), MenuConfig::interactive());
            app.run()?;
            info!("Session ended with {} tasks", app.manager().count());
        }
        Commands::Demo { json } => {
            let stdout = std::io::stdout();
            demo::run(&mut stdout.lock(), json)?;
        }
    }

    Ok(())
}
