//! Escape sequences in string literals.
//!
//! Recognized escapes: `\n`, `\t`, `\r`, `\\`, `\"`, `\0`.

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Unescape the contents of a string literal (quotes already stripped).
///
/// Unknown escapes are kept literally and their byte offsets (relative to
/// `s`) are reported through `on_unknown`.
pub(crate) fn unescape_string(s: &str, mut on_unknown: impl FnMut(usize, char)) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((_, esc)) => {
                if let Some(resolved) = resolve_escape(esc) {
                    result.push(resolved);
                } else {
                    on_unknown(offset, esc);
                    result.push('\\');
                    result.push(esc);
                }
            }
            None => result.push('\\'),
        }
    }

    result
}

#[cfg(test)]
mod tests;
