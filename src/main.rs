mod api;
mod app;
mod cli;
mod error;
mod utils;
mod verify;
#[cfg(feature = "gui")]
mod ui;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = crate::app::Settings::load();

    // No arguments opens the form window.
    #[cfg(feature = "gui")]
    {
        if std::env::args_os().len() <= 1 {
            crate::ui::run(settings);
            return ExitCode::SUCCESS;
        }
    }

    crate::cli::run(crate::cli::Args::parse(), &settings)
}
