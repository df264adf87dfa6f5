//! Workstate CLI main entry point

use clap::Parser;
use tracing::info;
use workstate_cli::{
    cli::{Cli, Commands},
    commands,
    error::CliResult,
    utils::{init_tracing, ColoredOutput},
};
use workstate_config::ConfigLoader;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", ColoredOutput::error("Error:"), e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    info!("Workstate CLI v{}", env!("CARGO_PKG_VERSION"));

    // Validated per command, after any flag overrides
    let config = ConfigLoader::resolve(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        info!("Configuration: {}", ColoredOutput::highlight(&path.display().to_string()));
    }

    match cli.command {
        Commands::Serve { args } => commands::serve::execute(args, config).await,
        Commands::Config => commands::config::execute(&config),
        Commands::HashPassword => commands::hash_password::execute(&config),
    }
}
