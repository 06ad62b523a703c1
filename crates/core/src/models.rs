use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How the generated map obtains each module at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStrategy {
    /// Dynamic `import('name')` expression per entry, no static imports
    Lazy,
    /// Static `import * as ident` preamble, entries point at the bindings
    Eager,
}

impl Default for ImportStrategy {
    fn default() -> Self {
        ImportStrategy::Lazy
    }
}

/// The three name sources that determine map membership
#[derive(Debug, Clone, Default)]
pub struct ModuleSelection {
    /// Singleton packages from the host registry
    pub core: BTreeSet<String>,
    /// Packages forced in even though not part of the core set
    pub extra: BTreeSet<String>,
    /// Packages forced out regardless of other membership
    pub ignored: BTreeSet<String>,
}

impl ModuleSelection {
    pub fn new<C, E, I>(core: C, extra: E, ignored: I) -> Self
    where
        C: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
        I: IntoIterator<Item = String>,
    {
        Self {
            core: core.into_iter().collect(),
            extra: extra.into_iter().collect(),
            ignored: ignored.into_iter().collect(),
        }
    }

    /// Resolve to the final sorted name list: `(core ∪ extra) − ignored`.
    ///
    /// Union happens before subtraction, so a name listed in both `extra`
    /// and `ignored` stays out. Sort order is plain lexicographic ordering
    /// over the full identifier, including any `@scope/` prefix.
    pub fn resolve(&self) -> Vec<String> {
        self.core
            .union(&self.extra)
            .filter(|name| !self.ignored.contains(*name))
            .cloned()
            .collect()
    }
}
