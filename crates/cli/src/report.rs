use anyhow::Result;
use tailor_declarations::{render_build_files, PutativeDeclarations};

/// Human-readable report: the BUILD files that would be created or
/// extended, with the stanzas each would gain.
pub(crate) fn text(proposals: &PutativeDeclarations) -> String {
    if proposals.is_empty() {
        return "No new declarations needed; every source file is owned.\n".to_string();
    }

    let mut out = format!("Proposed {} declaration(s):\n", proposals.len());
    for (build_file, content) in render_build_files(proposals) {
        out.push('\n');
        out.push_str(&build_file);
        out.push_str(":\n");
        for line in content.lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

/// Machine-readable report: the proposal sequence as pretty JSON.
pub(crate) fn json(proposals: &PutativeDeclarations) -> Result<String> {
    Ok(serde_json::to_string_pretty(proposals)?)
}
