mod transform;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use slingcodec::OutputFormat;

use crate::transform::transform_directory;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a single i18n resource file to a Sling i18n Message file.
    Convert {
        /// The input file to process (.properties, .xml or .json)
        #[arg(short, long)]
        input: PathBuf,
        /// The output file to write the result to
        #[arg(short, long)]
        output: PathBuf,
        /// Output format: json, json-properties, xml or properties
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Transform all i18n resource files in a directory tree.
    Transform {
        /// Directory containing the i18n source files
        #[arg(short, long)]
        source: PathBuf,
        /// Directory to write the generated files to
        #[arg(short, long)]
        target: PathBuf,
        /// Output format: json, json-properties, xml or properties
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.commands {
        Commands::Convert {
            input,
            output,
            format,
        } => {
            let Some(format) = parse_format(&format) else {
                return ExitCode::FAILURE;
            };
            if let Err(e) = slingcodec::transform(&input, &output, format) {
                eprintln!("Failed to transform {}: {e}", input.display());
                return ExitCode::FAILURE;
            }
            println!("Transformed {} to {}", input.display(), output.display());
            ExitCode::SUCCESS
        }
        Commands::Transform {
            source,
            target,
            format,
        } => {
            let Some(format) = parse_format(&format) else {
                return ExitCode::FAILURE;
            };
            let summary = transform_directory(&source, &target, format);
            println!(
                "Transformed {} file(s), {} failure(s)",
                summary.transformed, summary.failed
            );
            if summary.failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match OutputFormat::from_str(s) {
        Ok(format) => Some(format),
        Err(e) => {
            eprintln!("Error: {e}");
            None
        }
    }
}
