//! Command-line interface for sumcat.
//!
//! This binary walks the current working directory and writes a tree view
//! plus the contents of matching files into `sum.txt`.

use clap::Parser;
use clap::error::ErrorKind;
use std::env;
use std::process::exit;
use sumcat::{SumcatBuilder, TypeFilter, parse_name_list, sumcat};

/// sumcat — single-file directory snapshot tool
#[derive(Parser)]
#[command(name = "sumcat", version, about, long_about = None)]
struct Cli {
    /// Files or directories to skip, by base name (comma-separated)
    exceptions: String,

    /// File extensions to include (comma-separated), or 'all' for every file
    file_types: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            println!("{}", e);
            exit(1);
        }
    };

    let dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            println!("Error getting current directory: {}", e);
            exit(1);
        }
    };

    let options = SumcatBuilder::new(dir)
        .exceptions(parse_name_list(&cli.exceptions))
        .filter(TypeFilter::parse(&cli.file_types))
        .build();

    match sumcat(options) {
        Ok(output) => {
            let name = output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| output.display().to_string());
            println!("File contents collected and saved to {}", name);
        }
        Err(e) => {
            println!("Error collecting file contents: {}", e);
            exit(1);
        }
    }
}
