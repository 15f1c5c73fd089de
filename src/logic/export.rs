//! Favicon encoding
//!
//! Pure functions that turn an emoji into a minimal SVG document and derive
//! the file name it is saved under. Writing the file lives in
//! [`crate::export`].

/// Suffix appended to every exported file name
pub const FAVICON_SUFFIX: &str = "-favicon.svg";

/// Encode `symbol` as a single-glyph SVG document
///
/// The output depends only on `symbol`.
///
/// # Examples
/// ```
/// use emojifav::logic::export::encode_svg;
///
/// assert_eq!(
///     encode_svg("😀"),
///     r#"<svg xmlns="http://www.w3.org/2000/svg"><text y="27" font-size="27">😀</text></svg>"#
/// );
/// ```
pub fn encode_svg(symbol: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><text y="27" font-size="27">{}</text></svg>"#,
        escape_text(symbol)
    )
}

/// Escape the characters XML text content cannot carry literally
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// File name for an exported emoji
///
/// Every run of whitespace becomes a single hyphen. Path separators are
/// replaced too so the name always stays inside the output directory.
///
/// # Examples
/// ```
/// use emojifav::logic::export::favicon_file_name;
///
/// assert_eq!(favicon_file_name("grinning face"), "grinning-face-favicon.svg");
/// ```
pub fn favicon_file_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        match c {
            '/' | '\\' => stem.push('-'),
            _ => stem.push(c),
        }
    }

    stem.push_str(FAVICON_SUFFIX);
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_exact_document() {
        assert_eq!(
            encode_svg("😀"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><text y=\"27\" font-size=\"27\">😀</text></svg>"
        );
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode_svg("🐶").as_bytes(), encode_svg("🐶").as_bytes());
    }

    #[test]
    fn test_encode_keeps_multi_codepoint_emoji() {
        let family = "👨\u{200d}👩\u{200d}👧";
        assert!(encode_svg(family).contains(family));
        assert!(encode_svg("❤️").contains("❤️"));
    }

    #[test]
    fn test_encode_escapes_markup() {
        assert!(encode_svg("<&>").contains(">&lt;&amp;&gt;<"));
    }

    #[test]
    fn test_file_name_from_name() {
        assert_eq!(favicon_file_name("grinning face"), "grinning-face-favicon.svg");
    }

    #[test]
    fn test_file_name_collapses_whitespace_runs() {
        assert_eq!(favicon_file_name("a  \t b"), "a-b-favicon.svg");
    }

    #[test]
    fn test_file_name_keeps_edge_whitespace_as_hyphen() {
        assert_eq!(favicon_file_name(" dog "), "-dog--favicon.svg");
    }

    #[test]
    fn test_file_name_single_word() {
        assert_eq!(favicon_file_name("rocket"), "rocket-favicon.svg");
    }

    #[test]
    fn test_file_name_replaces_path_separators() {
        assert_eq!(favicon_file_name("up/down"), "up-down-favicon.svg");
        assert_eq!(favicon_file_name("..\\x"), "..-x-favicon.svg");
    }
}
