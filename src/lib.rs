pub mod config;
pub mod knowledge;
pub mod probe;
pub mod render;
pub mod report;
pub mod system;

pub use probe::{resolve_version, Resolution};
pub use report::{PackageEntry, Report, ReportBuilder};

use anyhow::Context;

pub fn run() -> anyhow::Result<()> {
    setup_tracing();

    let config = config::Config::load().context("load config")?;
    let mut builder = config.to_builder();

    // Every command-line word is an extra package name to probe; no flags.
    let extra: Vec<String> = std::env::args().skip(1).collect();
    if !extra.is_empty() {
        builder = builder.additional(extra);
    }

    println!("{}", builder.build());
    Ok(())
}

fn setup_tracing() {
    let filter = std::env::var("ENVREPORT_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
