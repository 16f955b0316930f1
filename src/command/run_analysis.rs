use anyhow::Result;

use crate::analysis::{self, context, Context};

pub fn run_analysis() -> Result<()> {
    let context = Context::from_env()?;
    let scope = context::scope_from_env()?;
    let stats = analysis::run(&context, &scope)?;
    if stats.crashed_workers > 0 {
        log::warn!("{} worker(s) stopped early", stats.crashed_workers);
    }
    Ok(())
}
