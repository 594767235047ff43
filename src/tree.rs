//! Internal module for rendering the directory hierarchy as indented text.

use crate::error::SumcatError;
use crate::options::SumcatOptions;
use std::fs;
use std::io::Write;
use std::path::Path;

const INDENT: &str = "│   ";
const BRANCH: &str = "├── ";

/// Recursively writes a tree view of `dir` into `out`.
///
/// At depth zero the root directory's own base name is emitted first.
/// Directories named in the exclusion set are pruned whole; files appear
/// only if they pass the type filter. The output file's own name never
/// appears. Entries come out in whatever order the filesystem enumeration
/// yields, there is no explicit re-sort.
///
/// # Errors
///
/// The first filesystem or write error aborts the whole render.
pub(crate) fn write_tree<W: Write>(
    dir: &Path,
    out: &mut W,
    options: &SumcatOptions,
    depth: usize,
) -> Result<(), SumcatError> {
    if depth == 0 {
        let root_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        writeln!(out, "{}", root_name).map_err(|e| SumcatError::io(dir, e))?;
    }

    let entries = fs::read_dir(dir).map_err(|e| SumcatError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SumcatError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == options.output_name {
            continue;
        }
        let file_type = entry
            .file_type()
            .map_err(|e| SumcatError::io(entry.path(), e))?;
        if file_type.is_dir() {
            if options.is_excluded(&name) {
                continue;
            }
            writeln!(out, "{}{}{}/", INDENT.repeat(depth), BRANCH, name)
                .map_err(|e| SumcatError::io(entry.path(), e))?;
            write_tree(&entry.path(), out, options, depth + 1)?;
        } else if options.filter.matches(&name) {
            writeln!(out, "{}{}{}", INDENT.repeat(depth), BRANCH, name)
                .map_err(|e| SumcatError::io(entry.path(), e))?;
        }
    }
    Ok(())
}
