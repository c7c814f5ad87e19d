use eyre::Result;
use tracing_subscriber::EnvFilter;

use storyseed_cli::config::{GeneratorConfig, LogFormat};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = GeneratorConfig::from_env()?;

    // Logs go to stderr; stdout carries only the confirmation line.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Pretty => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let summary = storyseed_cli::generate(&config)?;

    println!(
        "Mock data generated successfully to {}",
        summary.path.display()
    );
    Ok(())
}
