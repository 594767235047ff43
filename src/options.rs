use crate::filter::TypeFilter;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Default name of the generated output file.
pub const DEFAULT_OUTPUT_NAME: &str = "sum.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumcatOptions {
    /// Root directory of the traversal.
    pub root: PathBuf,
    /// Base name of the output file, created under `root`.
    ///
    /// This name is always excluded from both the tree view and the content
    /// walk, whatever the user-supplied filters say.
    pub output_name: String,
    /// File and directory base names to skip entirely. Matching is by exact
    /// name equality, not path or pattern. An excluded directory is pruned
    /// whole, nothing beneath it is visited.
    pub exceptions: HashSet<String>,
    /// Which files to include.
    pub filter: TypeFilter,
}
impl Default for SumcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            exceptions: HashSet::new(),
            filter: TypeFilter::All,
        }
    }
}
impl SumcatOptions {
    pub(crate) fn is_excluded(&self, name: &str) -> bool {
        self.exceptions.contains(name)
    }
}

/// Parses a comma-separated name list, trimming whitespace from each element.
///
/// An empty input yields a single empty-name entry, which matches no real
/// directory entry.
pub fn parse_name_list(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_string()).collect()
}

#[derive(Debug, Default)]
pub struct SumcatBuilder {
    options: SumcatOptions,
}
impl SumcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SumcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.options.output_name = name.into();
        self
    }
    pub fn exceptions(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.options.exceptions = names.into_iter().collect();
        self
    }
    pub fn filter(mut self, filter: TypeFilter) -> Self {
        self.options.filter = filter;
        self
    }
    pub fn build(self) -> SumcatOptions {
        self.options
    }
}
