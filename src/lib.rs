//! # Sumcat
//!
//! `sumcat` is a library for producing a single-file snapshot of a directory:
//! it renders an indented tree view of the hierarchy, then concatenates the
//! raw contents of every matching file into one output file (`sum.txt` by
//! default), separated by headers and delimiters.
//!
//! Directories and files can be skipped by exact base name, and files are
//! selected by exact extension match or the `all` sentinel. File bytes are
//! copied verbatim, with no text-encoding assumptions. The output file itself
//! is always excluded from its own scan.
//!
//! Traversal is single-threaded and blocking, and the first filesystem or
//! write error aborts the whole operation.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use sumcat::{SumcatBuilder, TypeFilter, sumcat};
//!
//! let options = SumcatBuilder::new(".")
//!     .exceptions(vec!["target".to_string(), ".git".to_string()])
//!     .filter(TypeFilter::parse("rs,toml"))
//!     .build();
//!
//! let output = sumcat(options).expect("Failed to collect directory");
//! println!("Snapshot written to {}", output.display());
//! ```

mod engine;
mod error;
mod filter;
mod options;
mod tree;

pub use engine::sumcat;
pub use error::SumcatError;
pub use filter::{ALL_SENTINEL, TypeFilter};
pub use options::{DEFAULT_OUTPUT_NAME, SumcatBuilder, SumcatOptions, parse_name_list};
