use crate::error::SumcatError;
use crate::options::SumcatOptions;
use crate::tree::write_tree;
use ignore::WalkBuilder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

const SEPARATOR_WIDTH: usize = 50;

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &SumcatOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder.standard_filters(false).follow_links(false);
        // The output name is skipped like a user exception, at any depth.
        let mut skipped = options.exceptions.clone();
        skipped.insert(options.output_name.clone());
        builder.filter_entry(move |entry| {
            !skipped.contains(entry.file_name().to_string_lossy().as_ref())
        });
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<ignore::DirEntry, SumcatError>> {
        self.inner.map(|result| match result {
            Ok(entry) => Ok(entry),
            Err(e) => Err(SumcatError::Walk(e.to_string())),
        })
    }
}

fn write_file_contents<W: Write>(path: &Path, writer: &mut W) -> Result<(), SumcatError> {
    let mut file = File::open(path).map_err(|e| SumcatError::io(path, e))?;
    io::copy(&mut file, writer).map_err(|e| SumcatError::io(path, e))?;
    Ok(())
}

/// Walks `options.root`, writes a tree view followed by the contents of every
/// matching file into `<root>/<output_name>`, and returns the output path.
///
/// The output sequence is fixed: tree text, a 50-character `=` separator, then
/// for each included file a `File: <relative-path>` header, the file's raw
/// bytes verbatim, and a 50-character `-` separator. The output file itself is
/// always excluded from the scan. The first error aborts the whole operation;
/// a partially written output file may remain on disk.
pub fn sumcat(options: SumcatOptions) -> Result<PathBuf, SumcatError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting sumcat with root: {}", options.root.display());
    let output_path = options.root.join(&options.output_name);
    let file = File::create(&output_path).map_err(|e| SumcatError::io(&output_path, e))?;
    let mut writer = BufWriter::new(file);

    write_tree(&options.root, &mut writer, &options, 0)?;
    write!(writer, "\n{}\n\n", "=".repeat(SEPARATOR_WIDTH))
        .map_err(|e| SumcatError::io(&output_path, e))?;

    for result in Walker::new(&options).into_iter() {
        let entry = result?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == options.output_name || !options.filter.matches(&name) {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(&options.root).map_err(|_| {
            SumcatError::InvalidPath(format!(
                "{} is not under {}",
                path.display(),
                options.root.display()
            ))
        })?;
        #[cfg(feature = "logging")]
        tracing::debug!("Collecting file: {}", relative.display());
        write!(writer, "File: {}\n\n", relative.display())
            .map_err(|e| SumcatError::io(path, e))?;
        write_file_contents(path, &mut writer)?;
        write!(writer, "\n{}\n\n", "-".repeat(SEPARATOR_WIDTH))
            .map_err(|e| SumcatError::io(path, e))?;
    }

    writer
        .flush()
        .map_err(|e| SumcatError::io(&output_path, e))?;
    Ok(output_path)
}
