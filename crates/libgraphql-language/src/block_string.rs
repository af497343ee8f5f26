//! Block string (`"""..."""`) indentation handling, plus the inverse
//! operations used by the printer to render string literals.

use crate::graphql_syntax_error::split_lines;

/// Produces the value of a block string from its raw lines.
///
/// 1. The common indent is the smallest count of leading spaces/tabs among
///    every line after the first that is not blank (a blank line holds only
///    spaces and tabs).
/// 2. That many leading characters are removed from every line except the
///    first.
/// 3. Leading and trailing blank lines are dropped.
/// 4. Trailing spaces and tabs are removed from every remaining line.
///
/// Tabs and spaces each count as one unit of indentation.
pub fn dedent_block_string_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let common_indent = lines
        .iter()
        .skip(1)
        .map(|line| line.as_ref())
        .filter(|line| !is_blank(line))
        .map(leading_whitespace_len)
        .min()
        .unwrap_or(0);

    let mut dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let line = line.as_ref();
            if idx == 0 {
                line
            } else {
                &line[common_indent.min(leading_whitespace_len(line))..]
            }
        })
        .collect();

    while dedented.last().is_some_and(|line| is_blank(line)) {
        dedented.pop();
    }
    let first_content = dedented
        .iter()
        .position(|line| !is_blank(line))
        .unwrap_or(dedented.len());

    dedented
        .drain(first_content..)
        .map(|line| line.trim_end_matches([' ', '\t']).to_string())
        .collect()
}

/// Applies [`dedent_block_string_lines`] to arbitrary multi-line text and
/// joins the result with `\n`.
///
/// ```
/// use libgraphql_language::dedent_block_string;
///
/// let text = "\n      type Query {\n        me: User\n      }\n    ";
/// assert_eq!(dedent_block_string(text), "type Query {\n  me: User\n}");
/// ```
pub fn dedent_block_string(text: &str) -> String {
    let lines: Vec<&str> = split_lines(text).collect();
    dedent_block_string_lines(&lines).join("\n")
}

/// Renders `value` as a block string literal.
///
/// `"""` inside the value is escaped as `\"""`. The literal is spread over
/// several lines whenever the value is multi-line, long, or would be
/// misread on a single line (a trailing `"` or `\`, or continuation lines
/// that all start with whitespace).
pub fn print_block_string(value: &str) -> String {
    let escaped = value.replace("\"\"\"", "\\\"\"\"");
    let lines: Vec<&str> = split_lines(&escaped).collect();
    let is_single_line = lines.len() == 1;

    let force_leading_newline = lines.len() > 1
        && lines
            .iter()
            .skip(1)
            .all(|line| line.is_empty() || line.starts_with([' ', '\t']));

    let has_trailing_triple_quotes = escaped.ends_with("\\\"\"\"");
    let has_trailing_quote = value.ends_with('"') && !has_trailing_triple_quotes;
    let has_trailing_slash = value.ends_with('\\');
    let force_trailing_newline = has_trailing_quote || has_trailing_slash;

    let print_as_multiple_lines = !is_single_line
        || value.chars().count() > 70
        || force_trailing_newline
        || force_leading_newline
        || has_trailing_triple_quotes;

    let skip_leading_newline = is_single_line && value.starts_with([' ', '\t']);

    let mut result = String::with_capacity(escaped.len() + 8);
    result.push_str("\"\"\"");
    if (print_as_multiple_lines && !skip_leading_newline) || force_leading_newline {
        result.push('\n');
    }
    result.push_str(&escaped);
    if print_as_multiple_lines || force_trailing_newline {
        result.push('\n');
    }
    result.push_str("\"\"\"");
    result
}

/// Renders `value` as a double-quoted string literal.
///
/// `"` and `\` are backslash-escaped; control characters use their short
/// escape (`\n`, `\t`, ...) when one exists and `\uXXXX` otherwise.
pub fn print_string(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for ch in value.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\u{0008}' => result.push_str("\\b"),
            '\t' => result.push_str("\\t"),
            '\n' => result.push_str("\\n"),
            '\u{000C}' => result.push_str("\\f"),
            '\r' => result.push_str("\\r"),
            '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}' => {
                result.push_str(&format!("\\u{:04X}", ch as u32));
            },
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}
