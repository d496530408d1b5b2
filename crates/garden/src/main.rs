use std::io::Write;

use anyhow::{Context, Result};
use garden::cli::{build_cli, init_tracing};
use garden_core::GardenConfig;

fn main() -> Result<()> {
    let _matches = build_cli().get_matches();
    init_tracing()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    garden::demo::run(&mut out, &GardenConfig::default())?;
    out.flush().context("Failed to flush stdout")
}
