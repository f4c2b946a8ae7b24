//! `xid`: generate, inspect and convert XIDs.
//!
//! ```bash
//! xid new -n 3
//! xid new --format json --clock system
//! xid inspect 9m4e2mr0ui3e8a215n4g
//! xid encode 4d88e15b60f486e428412dc9
//! xid decode 9m4e2mr0ui3e8a215n4g
//! ```

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig};
use std::io::Write;
use telemetry::init_telemetry;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    commands::run(config, &mut out)?;
    out.flush()?;
    Ok(())
}
