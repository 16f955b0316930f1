use anyhow::{anyhow, Result};
use env_logger::Env;

use lastval_params::command;
use lastval_params::constants::{defaults, envvars};
use lastval_params::helpers::load_dotenv;

const CMD_RUN: &str = "run";

fn main() -> Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_RUN) => command::run_analysis(),
        _ => Err(anyhow!("Subcommand must be '{CMD_RUN}'")),
    }
}
