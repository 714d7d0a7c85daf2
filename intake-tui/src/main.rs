mod account;
mod form;
mod gateway;
mod runtime;
mod terminal;
mod ui;
mod widgets;

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

#[tokio::main]
async fn main() {
    // The TUI owns stdout, so diagnostics go to a file.
    if let Ok(log_file) = File::create("intake-tui.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = runtime::run().await {
        eprintln!("Error: {e}");
    }
}
