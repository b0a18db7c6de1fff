mod config;
mod telemetry;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use stringgen::{Error, GenerateOptions, PlaceholderMode, check, compile};

use crate::config::{DEFAULT_TARGET, Paths, resolve_paths};

/// Generate StringConstants.swift from an Xcode String Catalog.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project root; the catalog and output paths are derived from it
    #[arg(long, env = "SRCROOT")]
    srcroot: Option<PathBuf>,

    /// App target directory under the project root
    #[arg(long, default_value = DEFAULT_TARGET)]
    target: String,

    /// Catalog to read instead of <srcroot>/<target>/Resources/Localizable.xcstrings
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// File to write instead of <srcroot>/<target>/Resources/Generated/<enum-name>.swift
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the generated enum
    #[arg(long, default_value = stringgen::codegen::DEFAULT_TYPE_NAME)]
    enum_name: String,

    /// Module imported by the generated file
    #[arg(long, default_value = stringgen::codegen::DEFAULT_IMPORT)]
    import: String,

    /// Which placeholders make a key a formatting function: `object` (%@) or `any`
    #[arg(long, default_value = "object")]
    placeholders: PlaceholderMode,

    /// Exit with an error if the generated file is missing or out of date; write nothing
    #[arg(long)]
    check: bool,

    /// Log each declaration to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = telemetry::initialise(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    let options = GenerateOptions {
        type_name: args.enum_name,
        import: args.import,
        placeholders: args.placeholders,
    };
    let file_name = options.file_name();

    let Paths { catalog, output } = match resolve_paths(
        args.srcroot.as_deref(),
        &args.target,
        args.catalog,
        args.output,
        &file_name,
    ) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.check {
        match check(&catalog, &output, &options) {
            Ok(true) => println!("{} is up to date", output.display()),
            Ok(false) => {
                eprintln!(
                    "Error: {} is out of date; rerun stringgen without --check",
                    output.display()
                );
                process::exit(1);
            }
            Err(e) => fail(e),
        }
        return;
    }

    match compile(&catalog, &output, &options) {
        Ok(summary) => {
            tracing::info!(
                constants = summary.constants,
                accessors = summary.accessors,
                skipped = summary.skipped,
                changed = summary.changed,
                "compiled string catalog"
            );
            println!("Generated {} at {}", file_name, summary.output.display());
        }
        Err(e) => fail(e),
    }
}

fn fail(error: Error) -> ! {
    match error {
        // Same stream as the success line.
        Error::MissingCatalog(path) => {
            println!("Error: String Catalog not found at {}", path.display())
        }
        other => eprintln!("Error: {}", other),
    }
    process::exit(1);
}
