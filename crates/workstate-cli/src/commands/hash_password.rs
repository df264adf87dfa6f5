//! Produce a stored-format password hash from a password read on stdin

use crate::error::{CliError, CliResult};
use std::io::{self, BufRead};
use workstate_config::WorkstateConfig;

pub fn execute(config: &WorkstateConfig) -> CliResult<()> {
    config.validate()?;
    let hash = hash_from_reader(config, io::stdin().lock())?;
    println!("{hash}");
    Ok(())
}

/// Hash the first line of `reader`, without its line terminator
pub fn hash_from_reader<R: BufRead>(config: &WorkstateConfig, mut reader: R) -> CliResult<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let password = line.strip_suffix('\n').unwrap_or(&line);
    let password = password.strip_suffix('\r').unwrap_or(password);
    if password.is_empty() {
        return Err(CliError::General("expected a password on stdin".to_string()));
    }

    let hasher = config.auth.password_hasher()?;
    Ok(hasher.hash(password)?)
}
