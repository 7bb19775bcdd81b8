use clap::Parser;
use wargcv::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    wargcv::logging::init_tracing();
    let cli = Cli::parse();
    run(cli, &mut std::io::stdout().lock()).inspect_err(|e| tracing::error!("{e:#}"))
}
