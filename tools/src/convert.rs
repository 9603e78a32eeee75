//! Transliterate a lyric file, or export the default map

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use latinize::{lyrics::transliterate_file, map::MappingTable};
use std::{path::PathBuf, process::ExitCode};
use tracing::info;

/// Transliterate Cyrillic lyric files to Latin script, leaving [tag:value] lines untouched
#[derive(Parser)]
#[clap(
    name = "latinize",
    about,
    long_about = None,
    after_help = "MAP FORMAT:\n    A flat JSON object mapping single characters to their replacement.\n    A null or empty replacement drops the character.\n\n    {\n      \"Ж\": \"Zh\",\n      \"ж\": \"zh\",\n      \"ь\": \"\"\n    }"
)]
pub struct ConvertArgs {
    /// The lyric file to transliterate
    input: Option<PathBuf>,

    /// Where to write the transliterated lyrics
    output: Option<PathBuf>,

    /// Use the transliteration map in this JSON file instead of the built-in one
    #[clap(long, value_name = "PATH")]
    map: Option<PathBuf>,

    /// Export the built-in map as JSON, so it can be used as a starting point for edits
    #[clap(long, value_name = "PATH")]
    write_default_map: Option<PathBuf>,
}

/// Print the usage text to stdout
pub fn print_help() -> Result<()> {
    ConvertArgs::command()
        .print_help()
        .context("Could not print the help text")?;
    println!();

    Ok(())
}

/// Run a conversion as described by the command-line arguments
///
/// Exports the default map first when asked to. If no input was given after that, this is
/// all that happens. Otherwise both the input and output path are required, and the input
/// is transliterated with either the built-in map or the one passed through `--map`.
pub fn convert(args: ConvertArgs) -> Result<ExitCode> {
    if let Some(path) = &args.write_default_map {
        MappingTable::default().to_path(path).context(format!(
            "Could not write the default map to {}",
            path.display()
        ))?;

        println!("Default map written to: {}", path.display());

        if args.input.is_none() {
            return Ok(ExitCode::SUCCESS);
        }
    }

    let (input, output) = match (&args.input, &args.output) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            eprintln!(
                "Error: input and output paths are required unless only writing the default map."
            );
            print_help()?;

            return Ok(ExitCode::FAILURE);
        }
    };

    let table = match &args.map {
        Some(path) => MappingTable::from_path(path)
            .context(format!("Could not load the map from {}", path.display()))?,
        None => MappingTable::default(),
    };
    info!(entries = table.len(), "Using mapping table");

    let lines = transliterate_file(input, output, &table).context(format!(
        "Could not transliterate {} to {}",
        input.display(),
        output.display()
    ))?;
    info!(lines, "Transliterated");

    println!("Transliteration completed: {}", output.display());

    Ok(ExitCode::SUCCESS)
}
