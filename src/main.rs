use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use calcpad::{LineResult, Notation, evaluate_document_with, export_document};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcpad evaluates a notepad-style document line by line and prints each
/// line with its result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcpad to read the document from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Prints only the raw results, one per line, instead of the annotated
    /// document.
    #[arg(short, long)]
    raw: bool,

    /// Significant digits used when rendering results.
    #[arg(short, long, default_value_t = 12)]
    precision: usize,

    /// The document, a file path with `--file`, or `-` for stdin.
    contents: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let document = match read_document(&args) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to read '{}': {e}", args.contents);
            return ExitCode::FAILURE;
        },
    };

    let results = evaluate_document_with(&document, &Notation::with_precision(args.precision));

    if args.raw {
        for result in &results {
            match result {
                LineResult::Display { raw, .. } => println!("{raw}"),
                LineResult::Error => println!("error"),
                LineResult::Blank => println!(),
            }
        }
    } else {
        println!("{}", export_document(&document, &results));
    }

    ExitCode::SUCCESS
}

fn read_document(args: &Args) -> io::Result<String> {
    if args.contents == "-" {
        let mut document = String::new();
        io::stdin().read_to_string(&mut document)?;
        Ok(document)
    } else if args.file {
        fs::read_to_string(&args.contents)
    } else {
        Ok(args.contents.clone())
    }
}
