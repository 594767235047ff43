//! File-type filtering by extension.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The literal filter value that matches every file regardless of extension.
pub const ALL_SENTINEL: &str = "all";

/// Decides which files are included, by exact extension equality.
///
/// Extensions are stored and compared lowercased, without the leading dot.
/// A file name with no dot has no extension and can only match [`TypeFilter::All`];
/// leading-dot names like `.gitignore` are likewise treated as extensionless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    /// Matches every file.
    All,
    /// Matches files whose extension is in the set.
    Extensions(HashSet<String>),
}

impl TypeFilter {
    /// Parses a comma-separated list of extensions, e.g. `"go,rs"`.
    ///
    /// Elements are whitespace-trimmed and lowercased. If any element is the
    /// literal `all`, the whole filter becomes [`TypeFilter::All`].
    pub fn parse(list: &str) -> Self {
        let mut extensions = HashSet::new();
        for element in list.split(',') {
            let element = element.trim().to_ascii_lowercase();
            if element == ALL_SENTINEL {
                return TypeFilter::All;
            }
            extensions.insert(element);
        }
        TypeFilter::Extensions(extensions)
    }

    /// Returns true if a file with this base name passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Extensions(extensions) => match Path::new(name).extension() {
                Some(ext) => extensions.contains(&ext.to_string_lossy().to_ascii_lowercase()),
                None => false,
            },
        }
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        TypeFilter::All
    }
}
