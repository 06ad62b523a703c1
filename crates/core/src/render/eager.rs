use super::{is_bare_key, local_ident};

/// Render the eager map: a preamble of static `import * as` bindings, then
/// a table pointing each package name at its local binding. Keys that are
/// already valid identifiers stay unquoted, matching what a formatter would
/// emit.
pub fn to_eager(names: &[String]) -> String {
    if names.is_empty() {
        return "export const modules = {};\n".to_string();
    }

    let imports: Vec<String> = names
        .iter()
        .map(|name| format!("import * as {} from '{}';", local_ident(name), name))
        .collect();

    let entries: Vec<String> = names
        .iter()
        .map(|name| {
            let ident = local_ident(name);
            if is_bare_key(name) {
                format!("{name}: {ident}")
            } else {
                format!("'{name}': {ident}")
            }
        })
        .collect();

    format!(
        "{}\n\nexport const modules = {{\n  {}\n}};\n",
        imports.join("\n"),
        entries.join(",\n  ")
    )
}
