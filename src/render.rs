use crate::formats::{CellKind, Node, Notebook};

const OJS_FENCE_OPEN: &str = "```{ojs}";
const FENCE_CLOSE: &str = "```";

/// Quarto front matter for the converted notebook. Ends with the closing
/// `---` line and its newline.
pub fn render_header(title: &str, authors: &[&str], license: &str) -> String {
    let mut lines = vec![
        "---".to_owned(),
        format!("title: {}", yaml_quoted(title)),
        "author:".to_owned(),
    ];
    for author in authors {
        lines.push(format!("  - {}", yaml_scalar(author)));
    }
    lines.push(format!("license: {}", yaml_quoted(license)));
    lines.push("echo: true".to_owned());
    lines.push("format: html".to_owned());
    lines.push("---\n".to_owned());
    lines.join("\n")
}

/// Renders one cell as an `{ojs}` block; blank cells yield `None`.
pub fn render_cell(node: &Node) -> Option<String> {
    let value = node.value.trim();
    if value.is_empty() {
        return None;
    }

    let body = match node.kind() {
        CellKind::Markup(tag) => format!("{}`{}`", tag.as_str(), escape_template(value)),
        CellKind::Code => value.to_owned(),
    };

    Some(format!("{OJS_FENCE_OPEN}\n{body}\n{FENCE_CLOSE}"))
}

pub fn render_cells(nodes: &[Node]) -> String {
    let blocks = nodes.iter().filter_map(render_cell).collect::<Vec<_>>();
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

pub fn render_document(notebook: &Notebook) -> String {
    let authors = notebook.author_names();
    let header = render_header(&notebook.title, &authors, notebook.license());
    let cells = render_cells(&notebook.nodes);
    format!("{header}\n{cells}")
}

// Unescaped backticks would close the template literal early.
fn escape_template(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut escaped = false;
    for ch in value.chars() {
        if ch == '`' && !escaped {
            out.push('\\');
        }
        escaped = ch == '\\' && !escaped;
        out.push(ch);
    }
    // A dangling backslash would escape the closing backtick.
    if escaped {
        out.push('\\');
    }
    out
}

/// Leaves simple names unquoted and quotes anything YAML would read as
/// something other than a plain string.
fn yaml_scalar(input: &str) -> String {
    let plain = input.chars().next().is_some_and(char::is_alphabetic)
        && input
            .chars()
            .all(|ch| ch.is_alphanumeric() || matches!(ch, ' ' | '.' | '-' | '_' | '\''))
        && !input.ends_with(' ')
        && !matches!(
            input.to_ascii_lowercase().as_str(),
            "true" | "false" | "yes" | "no" | "on" | "off" | "y" | "n" | "null"
        );
    if plain {
        input.to_owned()
    } else {
        yaml_quoted(input)
    }
}

fn yaml_quoted(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => out.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}
