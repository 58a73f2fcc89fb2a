mod action;
mod cli;
mod commands;
mod components;
mod config;
mod core;
mod errors;
mod state;
mod tui;

use crate::cli::{Cli, Cmd};
use crate::config::Config;
use crate::core::app::App;

use app::Application;
use clap::Parser;
use color_eyre::{Result, eyre::eyre};

struct Warden;

impl Application for Warden {
    const APP_ID: &'static str = "warden";
    const CONSOLE_LOG: bool = false;
}

#[tokio::main]
pub async fn main() -> Result<()> {
    let args = Cli::parse();
    let ctx = app::init::<Warden>(env!("CARGO_PKG_VERSION"))
        .map_err(|err| eyre!("initialization failed: {err}"))?;
    crate::errors::init(ctx.path_context())?;

    match args.cmd.unwrap_or_default() {
        Cmd::Run => {
            let config = Config::new(ctx.path_context())?;
            let mut app = App::new(config)?;
            app.run().await?;
        }
        Cmd::Check(check) => commands::check::run(&check)?,
    }
    Ok(())
}
