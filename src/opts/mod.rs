use std::env;

use log::error;

use crate::{Error, Result};

pub mod extract;

pub use self::extract::{Input, Summary};

pub const LOG_ENV_NAME: &str = "TLDR_LOG";

static LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configure the logger from a level name.
pub fn log_level(level: &str) -> Result<()> {
    if !LEVELS.contains(&level) {
        // Jump a few hoops so the error is still printed
        env::set_var(LOG_ENV_NAME, "error");
        pretty_env_logger::init_custom_env(LOG_ENV_NAME);
        return Err(Error::UnknownLogLevel(level.to_string()));
    }

    env::set_var(LOG_ENV_NAME, level);
    pretty_env_logger::init_custom_env(LOG_ENV_NAME);
    Ok(())
}

pub fn print_error(e: Error) {
    error!("{}", e);
}

pub fn fatal(e: Error) -> Result<()> {
    print_error(e);
    std::process::exit(1);
}
