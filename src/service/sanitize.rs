//! Markup stripping for free-text fields.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex"));
/// A script tag that never closes swallows the rest of the text.
static SCRIPT_UNCLOSED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*$").expect("valid regex"));
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("valid regex"));
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[A-Za-z!][^<>]*>?").expect("valid regex"));

/// Remove script and style elements with their content, drop every other tag but keep
/// its text, then trim. Plain text passes through unchanged apart from trimming.
///
/// Stripping inner tags can reassemble an outer one (`<<b>script>`), so passes repeat
/// until nothing changes. Every changing pass shortens the text, which bounds the loop.
pub fn sanitize(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(text, "");
    let text = SCRIPT_UNCLOSED.replace_all(&text, "");
    let text = STYLE_BLOCK.replace_all(&text, "");
    let text = COMMENT.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_element_and_keeps_surrounding_text() {
        assert_eq!(
            sanitize(r#"Naughty naughty very naughty <script>alert("xss");</script>"#),
            "Naughty naughty very naughty"
        );
    }

    #[test]
    fn script_match_is_case_insensitive_and_multiline() {
        assert_eq!(sanitize("a<SCRIPT type=\"x\">\nevil()\n</Script >b"), "ab");
    }

    #[test]
    fn unclosed_script_drops_the_remainder() {
        assert_eq!(sanitize("keep <script>alert(1); more"), "keep");
    }

    #[test]
    fn strips_tags_but_keeps_inner_text() {
        assert_eq!(
            sanitize(r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#),
            "Bad image . But not all bad."
        );
    }

    #[test]
    fn drops_style_blocks_and_comments() {
        assert_eq!(sanitize("<style>body{}</style>hi<!-- secret -->there"), "hithere");
    }

    #[test]
    fn nested_markup_cannot_reassemble_a_script_tag() {
        let input = "<<b>script>alert(1)<</b>/script>";
        let once = sanitize(input);
        assert_eq!(once, "");
        assert_eq!(sanitize(&once), once);

        let mixed = sanitize("Safe <<b>script>alert(1)<</b>/script> text");
        assert_eq!(mixed, "Safe  text");
        assert!(!mixed.contains('<'));
    }

    #[test]
    fn output_is_stable_under_repeated_sanitizing() {
        for input in [
            "<scr<script>x</script>ipt>alert(1)</script>",
            "<<<i>b</i>>i>deep<</<i>/i>b>",
            "plain text",
        ] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input {input}");
            assert!(!once.to_ascii_lowercase().contains("<script"), "input {input}");
        }
    }

    #[test]
    fn leaves_comparison_operators_alone() {
        assert_eq!(sanitize("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn unterminated_tag_is_removed() {
        assert_eq!(sanitize("text <img src=x onerror=alert(1)"), "text");
    }
}
