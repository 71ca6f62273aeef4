//! Docstring text: literal decoding and Python-style indentation cleanup.

/// Decodes the body of a string literal. Raw literals are returned as-is.
///
/// Handles the common escapes; `\N{...}` and unknown escapes are kept
/// verbatim, as Python does for the latter.
pub fn decode_literal(body: &str, raw: bool) -> String {
    if raw {
        return body.to_string();
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\n') => {}
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(first @ '0'..='7') => {
                let mut digits = String::from(first);
                while digits.len() < 3 {
                    match chars.next_if(|c| ('0'..='7').contains(c)) {
                        Some(d) => digits.push(d),
                        None => break,
                    }
                }
                // At most 0o777, always a valid scalar.
                if let Some(decoded) = u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    out.push(decoded);
                }
            }
            Some('a') => out.push('\u{7}'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some(kind @ ('x' | 'u' | 'U')) => {
                let width = match kind {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = (0..width)
                    .filter_map(|_| chars.next_if(char::is_ascii_hexdigit))
                    .collect();
                match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if digits.len() == width => out.push(decoded),
                    _ => {
                        out.push('\\');
                        out.push(kind);
                        out.push_str(&digits);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Cleans docstring indentation the way `inspect.cleandoc` does: tabs
/// expanded, first line left-stripped, common indent of the remaining
/// lines removed, blank leading and trailing lines dropped.
pub fn clean(doc: &str) -> String {
    let expanded: Vec<String> = doc.split('\n').map(expand_tabs).collect();

    let margin = expanded
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| indent_len(line))
        .min();

    let mut lines: Vec<&str> = Vec::with_capacity(expanded.len());
    for (i, line) in expanded.iter().enumerate() {
        if i == 0 {
            lines.push(line.trim_start());
        } else {
            let cut = margin.unwrap_or(0).min(indent_len(line));
            let offset = line.char_indices().nth(cut).map_or(line.len(), |(i, _)| i);
            lines.push(&line[offset..]);
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();
    lines.drain(..leading);

    lines.join("\n")
}

/// Leading whitespace, in characters.
fn indent_len(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0usize;
    for c in line.chars() {
        match c {
            '\t' => {
                let pad = 8 - column % 8;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}
