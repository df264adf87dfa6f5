//! REST API server command

use crate::error::CliResult;
use clap::Args;
use workstate_config::{AuthConfig, WorkstateConfig};
use workstate_server::AppState;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Host and port to bind to (overrides server.addr)
    #[arg(long)]
    pub addr: Option<String>,
}

impl ServeArgs {
    /// Fold command-line overrides into the loaded configuration
    pub fn apply(&self, config: &mut WorkstateConfig) {
        if let Some(addr) = &self.addr {
            config.server.addr = addr.clone();
        }
    }

    /// Apply overrides, then validate the result
    pub fn effective_config(&self, mut config: WorkstateConfig) -> CliResult<WorkstateConfig> {
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: WorkstateConfig) -> CliResult<()> {
    let config = args.effective_config(config)?;

    tracing::info!(
        algorithm = %config.auth.algorithm,
        login_ttl_minutes = config.auth.login_token_ttl_minutes,
        hash_rounds = config.auth.hash_rounds,
        "auth settings loaded"
    );

    if config.auth.secret == AuthConfig::default().secret {
        tracing::warn!("auth.secret is the built-in default; set WORKSTATE_SECRET");
    }

    let app_state = AppState::from_config(&config)?;
    workstate_server::serve_rest(app_state, &config.server.addr).await?;

    Ok(())
}
