use crate::models::ImportStrategy;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Packages not part of the host core set but required for the playground
/// examples, so they are forced into the map.
pub const EXTRA_MODULES: &[&str] = &[
    "@jupyterlab/docregistry",
    "@jupyterlab/outputarea",
    "@jupyter-widgets/base",
    "@lumino/datagrid",
];

/// Packages that are an implementation detail of the host and unlikely to
/// be used directly from the playground.
pub const IGNORED_MODULES: &[&str] = &["yjs"];

/// Configuration for a generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Package configuration file to read singleton names from
    pub registry_path: PathBuf,
    /// File the rendered map is written to
    pub output_path: PathBuf,
    /// Which import strategy to render
    pub strategy: ImportStrategy,
    /// Names forced into the map on top of the core set
    pub extra_modules: BTreeSet<String>,
    /// Names kept out of the map regardless of other membership
    pub ignored_modules: BTreeSet<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from("package.json"),
            output_path: PathBuf::from("src/modules.ts"),
            strategy: ImportStrategy::default(),
            extra_modules: EXTRA_MODULES.iter().map(|s| s.to_string()).collect(),
            ignored_modules: IGNORED_MODULES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(registry_path: PathBuf) -> Self {
        Self {
            registry_path,
            ..Default::default()
        }
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    pub fn with_strategy(mut self, strategy: ImportStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Append names to the built-in extra set
    pub fn with_extra_modules<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.extra_modules.extend(names);
        self
    }

    /// Append names to the built-in ignored set
    pub fn with_ignored_modules<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.ignored_modules.extend(names);
        self
    }
}
