//! Escaping for quoted dot labels, e.g. `label="..."`.
use crate::trace;

/// Escape text for use inside a double-quoted dot label.
///
/// Backslashes and double quotes are prefixed with a backslash. Graphviz
/// collapses repeated spaces, so a space is escaped as `\ ` unless the
/// character directly before it is an ordinary one (anything other than a
/// space, quote or backslash). Quotes and backslashes are skipped over when
/// looking back, and spaces at the very start of the text are escaped.
///
/// ```
/// # use dot_escape::escape_label_string;
/// assert_eq!(escape_label_string("a  b"), r"a \ b");
/// assert_eq!(escape_label_string(r#"say "hi""#), r#"say \"hi\""#);
/// ```
pub fn escape_label_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    escape_label_into(&mut result, text);
    result
}

/// Append the escaped form of `text` to `buf`.
///
/// See [`escape_label_string`] for the escaping rules. Each call starts a
/// fresh space run, regardless of what `buf` already ends with.
pub fn escape_label_into(buf: &mut String, text: &str) {
    buf.reserve(text.len());

    // Number of spaces seen since the last ordinary character. Starts
    // non-zero so leading spaces are escaped.
    let mut space_count: usize = 1;

    for (offset, ch) in text.char_indices() {
        match ch {
            '\\' | '"' => {
                trace::replaced("label", offset, ch, if ch == '"' { "\\\"" } else { "\\\\" });
                buf.push('\\');
                buf.push(ch);
            }
            ' ' => {
                if space_count != 0 {
                    trace::replaced("label", offset, ch, "\\ ");
                    buf.push('\\');
                }
                buf.push(ch);
                space_count += 1;
            }
            _ => {
                space_count = 0;
                buf.push(ch);
            }
        }
    }
}
