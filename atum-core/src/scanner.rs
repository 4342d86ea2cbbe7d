//! Line-level view of submitted source text.

/// Characters that end a line on their own. `\r\n` counts as one break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Split raw text into lines on every Unicode line boundary.
///
/// A trailing break does not produce an empty final line.
fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = raw.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        if !LINE_BREAKS.contains(&ch) {
            continue;
        }
        lines.push(&raw[start..index]);
        start = index + ch.len_utf8();
        if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    if start < raw.len() {
        lines.push(&raw[start..]);
    }
    lines
}

/// Trimmed, non-empty lines of `raw` in input order.
pub fn significant_lines(raw: &str) -> Vec<&str> {
    split_lines(raw)
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
