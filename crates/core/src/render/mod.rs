mod eager;
mod lazy;

pub use eager::to_eager;
pub use lazy::to_lazy;

use crate::models::ImportStrategy;

/// Render the sorted name list according to the chosen strategy
pub fn render(names: &[String], strategy: ImportStrategy) -> String {
    match strategy {
        ImportStrategy::Lazy => to_lazy(names),
        ImportStrategy::Eager => to_eager(names),
    }
}

/// Rewrite a module name into a valid TypeScript local binding.
///
/// Strips the leading `@` scope marker and replaces the separators that can
/// appear in npm package names (`/`, `-`, `.`) with underscores:
/// `@lumino/datagrid` becomes `lumino_datagrid`, `react-dom` becomes
/// `react_dom`.
pub fn local_ident(name: &str) -> String {
    name.trim_start_matches('@')
        .replace(['/', '-', '.'], "_")
}

/// True when `name` can stand unquoted as a TypeScript object key
pub(crate) fn is_bare_key(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
