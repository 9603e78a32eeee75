use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use latinize_tools::convert::{convert, print_help, ConvertArgs};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<_> = wild::args_os().collect();

    // Running without any arguments just explains how to use the tool
    if args.len() <= 1 {
        print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    convert(ConvertArgs::parse_from(args))
}
