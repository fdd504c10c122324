//! Escaping for HTML-like dot labels, e.g. `label=<...>`.
use crate::trace;

/// Escape text for use inside an HTML-like dot label.
///
/// Markup characters are replaced with entities and newlines become
/// `<br/>`. Spaces and backslashes have no special meaning in HTML-like
/// labels and are left as they are.
pub fn escape_html_label_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    escape_html_label_into(&mut result, text);
    result
}

/// Append the escaped form of `text` to `buf`.
pub fn escape_html_label_into(buf: &mut String, text: &str) {
    buf.reserve(text.len());

    for (offset, ch) in text.char_indices() {
        let replacement = match ch {
            '&' => "&amp;",
            '"' => "&quot;",
            '\'' => "&apos;",
            '<' => "&lt;",
            '>' => "&gt;",
            '\n' => "<br/>",
            _ => {
                buf.push(ch);
                continue;
            }
        };

        trace::replaced("html", offset, ch, replacement);
        buf.push_str(replacement);
    }
}
