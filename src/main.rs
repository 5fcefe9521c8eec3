use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scn", about = "Security Controls Navigator — searchable controls catalog")]
struct Cli {
    /// Path to a catalog JSON file (defaults to the embedded demo catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write debug logs to /tmp/scn-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/scn-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("scn debug log started — tail -f /tmp/scn-debug.log");
    }

    scn_tui::run(cli.catalog.as_deref())
}
