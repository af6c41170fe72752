use anyhow::Result;
use clap::Parser;

use selene_dl::commands::{menu, Context};
use selene_dl::core::config::Session;
use selene_dl::core::download::HttpFetcher;
use selene_dl::utils::browser::DefaultBrowser;
use selene_dl::utils::console::TerminalConsole;
use selene_dl::utils::signal;

/// Interactive downloader for Redmi Note 10 2022 (selene) recovery, firmware
/// and flashing tools. Set SELENE_DOWNLOAD_DIR to change the starting
/// download directory.
#[derive(Parser)]
#[clap(name = "selene-dl")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = signal::install_interrupt_handler() {
        log::warn!("Could not install interrupt handler: {e}");
    }

    let result = HttpFetcher::new().and_then(|fetcher| {
        let mut console = TerminalConsole;
        let browser = DefaultBrowser;
        let mut ctx = Context::new(Session::from_env(), &mut console, &fetcher, &browser);
        menu::run(&mut ctx)
    });

    if let Err(e) = result {
        if e.is_interrupt() {
            signal::exit_interrupted();
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
