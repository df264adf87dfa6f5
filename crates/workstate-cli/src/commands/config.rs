//! Show the effective configuration

use crate::error::CliResult;
use workstate_config::WorkstateConfig;

/// Render the configuration as YAML with the signing secret masked
pub fn render(config: &WorkstateConfig) -> CliResult<String> {
    Ok(serde_yaml::to_string(&config.redacted())?)
}

pub fn execute(config: &WorkstateConfig) -> CliResult<()> {
    config.validate()?;
    print!("{}", render(config)?);
    Ok(())
}
