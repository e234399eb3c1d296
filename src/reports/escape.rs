//! Escaping utilities for safe report generation.
//!
//! Questionnaire and catalog text is user-supplied: assessment names,
//! evidence, threat names. It may contain HTML that would inject markup
//! into a report, or quotes and newlines that would corrupt a CSV row.
//! Escape every such value before embedding it.

/// Escape a string for safe inclusion in HTML content.
///
/// Escapes the following characters:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
///
/// # Examples
///
/// ```
/// use riskgauge::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("safe text"), "safe text");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an optional string for HTML, returning "N/A" for None.
#[must_use]
pub fn escape_html_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "N/A".to_string(), escape_html)
}

/// Escape a string for a double-quoted CSV cell.
///
/// Doubles embedded quotes per RFC 4180 and flattens line breaks so each
/// record stays on one line.
///
/// ```
/// use riskgauge::reports::escape::escape_csv;
///
/// assert_eq!(escape_csv("say \"hi\""), "say \"\"hi\"\"");
/// assert_eq!(escape_csv("a\r\nb"), "a b");
/// ```
#[must_use]
pub fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Wrap a value in double quotes as a CSV cell.
#[must_use]
pub fn csv_cell(s: &str) -> String {
    format!("\"{}\"", escape_csv(s))
}
