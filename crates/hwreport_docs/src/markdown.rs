/// Generate a Markdown table from headers and rows.
///
/// Pipes in cell content are escaped and line breaks flattened so a cell
/// never breaks the table structure.
pub fn generate_markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();

    // Header row
    let header_cells: Vec<String> = headers.iter().map(|h| escape_cell(h)).collect();
    lines.push(format!("| {} |", header_cells.join(" | ")));

    // Separator row
    let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
    lines.push(format!("| {} |", separators.join(" | ")));

    // Data rows
    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}
