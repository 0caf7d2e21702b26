//! Comment directives.
//!
//! Two comment shapes are promoted out of the trivia channel into tokens:
//!
//! ```text
//! # vibe: 1.2        version directive
//! # uses: json, http uses directive
//! ```
//!
//! The shape must cover the whole comment; trailing whitespace is allowed.
//! Anything else, including a near miss like `# vibe: 1.2 beta`, is an
//! ordinary comment.

const VERSION_PREFIX: &str = "# vibe: ";
const USES_PREFIX: &str = "# uses: ";

/// Classification of one comment's text (starting at `#`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive<'a> {
    Version { major: u32, minor: u32 },
    Uses(Vec<&'a str>),
}

/// Classify a comment. `None` means an ordinary comment.
pub fn classify(comment: &str) -> Option<Directive<'_>> {
    let text = comment.trim_end();
    if let Some(rest) = text.strip_prefix(VERSION_PREFIX) {
        return parse_version(rest).map(|(major, minor)| Directive::Version { major, minor });
    }
    if let Some(rest) = text.strip_prefix(USES_PREFIX) {
        return parse_uses(rest).map(Directive::Uses);
    }
    None
}

/// Names of a `# uses:` comment, in source order; empty for anything else.
///
/// The parser calls this with the text under a `UsesDirective` token's span.
pub fn uses_names(comment: &str) -> Vec<&str> {
    match classify(comment) {
        Some(Directive::Uses(names)) => names,
        _ => Vec::new(),
    }
}

fn parse_version(rest: &str) -> Option<(u32, u32)> {
    let (major, minor) = rest.split_once('.')?;
    Some((parse_digits(major)?, parse_digits(minor)?))
}

/// `\d+` as `u32`; overflow rejects the directive.
fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_uses(rest: &str) -> Option<Vec<&str>> {
    let allowed = |b: u8| b.is_ascii_lowercase() || matches!(b, b'_' | b',' | b' ');
    if rest.is_empty() || !rest.bytes().all(allowed) {
        return None;
    }
    let mut names = Vec::new();
    for segment in rest.split(',') {
        let name = segment.trim_matches(' ');
        if name.is_empty() {
            continue;
        }
        // `a b` without a comma is not a name.
        if name.contains(' ') {
            return None;
        }
        names.push(name);
    }
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version() {
        assert_eq!(
            classify("# vibe: 1.2"),
            Some(Directive::Version { major: 1, minor: 2 })
        );
        assert_eq!(
            classify("# vibe: 10.04  \r"),
            Some(Directive::Version { major: 10, minor: 4 })
        );
    }

    #[test]
    fn test_version_near_misses() {
        for text in [
            "# vibe: 1",
            "# vibe: 1.",
            "# vibe: .2",
            "# vibe: 1.2.3",
            "# vibe: 1.2 beta",
            "#vibe: 1.2",
            "# vibe:1.2",
            "# vibe: 99999999999.0",
            "# vibe: -1.0",
        ] {
            assert_eq!(classify(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_uses() {
        assert_eq!(
            classify("# uses: json, http"),
            Some(Directive::Uses(vec!["json", "http"]))
        );
        assert_eq!(uses_names("# uses: a_b,,c ,"), vec!["a_b", "c"]);
        assert_eq!(uses_names("# uses: json"), vec!["json"]);
    }

    #[test]
    fn test_uses_near_misses() {
        for text in [
            "# uses: ",
            "# uses: , ,",
            "# uses: Json",
            "# uses: json http",
            "# uses: json2",
            "# uses json",
        ] {
            assert_eq!(classify(text), None, "{text:?}");
        }
        assert!(uses_names("# just a note").is_empty());
    }
}
