// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use syntax_sanity::{app, args::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors exit with 1; --help and --version are not errors.
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(args.behavior.verbose);

    match try_main(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> anyhow::Result<ExitCode> {
    let config = Config::try_from(args).context("failed to resolve configuration")?;
    Ok(app::run(&config)?)
}
