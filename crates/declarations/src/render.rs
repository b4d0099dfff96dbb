use crate::putative::{PutativeDeclaration, PutativeDeclarations};
use std::collections::BTreeMap;

/// Render a single proposal as the BUILD stanza it would insert.
///
/// A declaration taking the directory default name renders with no
/// arguments; an explicit name is spelled out.
pub fn render_stanza(decl: &PutativeDeclaration) -> String {
    match &decl.name {
        Some(name) => format!("{}(name=\"{}\")\n", decl.decl_type.alias(), name),
        None => format!("{}()\n", decl.decl_type.alias()),
    }
}

/// Render proposals grouped by the BUILD file they would land in.
///
/// Returns `BUILD` file path → concatenated stanzas, one blank line
/// between stanzas, in the order the proposals were emitted.
pub fn render_build_files(decls: &PutativeDeclarations) -> BTreeMap<String, String> {
    let mut files: BTreeMap<String, String> = BTreeMap::new();
    for decl in decls.iter() {
        let build_path = if decl.path.is_empty() {
            "BUILD".to_string()
        } else {
            format!("{}/BUILD", decl.path)
        };
        let content = files.entry(build_path).or_default();
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(&render_stanza(decl));
    }
    files
}
