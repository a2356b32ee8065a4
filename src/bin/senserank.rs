use clap::Parser;
use colored::Colorize;
use senserank_core::cli::{self, Cli};
use senserank_core::exit::SenseRankExit;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> SenseRankExit {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("senserank=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    match cli::run(&cli) {
        Ok(()) => SenseRankExit::Success,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            SenseRankExit::for_error(&e)
        }
    }
}
