use crate::TokenizeError;

/// Render a tokenize failure with the offending line and a caret under
/// the column, e.g.
///
/// ```text
/// Error:2:5: setup.py: EOF in multi-line statement
///   | foo(a,
///   |     ^
/// ```
pub fn render_tokenize_error(name: &str, err: &TokenizeError) -> String {
    let mut out = format!(
        "Error:{}:{}: {}: {}",
        err.pos.line,
        err.pos.col + 1,
        name,
        err.kind.message()
    );
    if let Some(line) = &err.line {
        let line_text = line.trim_end_matches(['\r', '\n']);
        out.push('\n');
        out.push_str("  | ");
        out.push_str(line_text);
        out.push('\n');
        out.push_str("  | ");
        for c in line_text.chars().take(err.pos.col as usize) {
            out.push(if c == '\t' { '\t' } else { ' ' });
        }
        out.push('^');
    }
    out
}
