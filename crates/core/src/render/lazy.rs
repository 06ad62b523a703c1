/// Render the lazy map: every entry is a dynamic `import()` expression
/// cast to `any`, so nothing loads until a plugin actually asks for it.
pub fn to_lazy(names: &[String]) -> String {
    if names.is_empty() {
        return "export const modules = {};\n".to_string();
    }

    let entries: Vec<String> = names
        .iter()
        .map(|name| format!("'{name}': import('{name}') as any"))
        .collect();

    format!(
        "export const modules = {{\n  {}\n}};\n",
        entries.join(",\n  ")
    )
}
