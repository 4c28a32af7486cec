//! Front-matter parsing

use std::collections::HashMap;

/// Front-matter data from the head of a content file
///
/// A flat key/value block delimited by `---` marker lines. Keys are not
/// validated against a fixed set; unknown keys are retained and ignored
/// downstream.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// A document without a front-matter block is not an error: the
    /// result is an empty mapping and the input unchanged. The same
    /// applies when the opening marker is never closed.
    pub fn parse(content: &str) -> (Self, &str) {
        let mut lines = content.split_inclusive('\n');

        // The opening marker must be the very first line
        let opening = match lines.next() {
            Some(first) if first.trim_end() == "---" && first.ends_with('\n') => first,
            _ => return (Self::default(), content),
        };

        let mut consumed = opening.len();
        let mut fields = HashMap::new();

        for line in lines {
            consumed += line.len();

            if line.trim_end() == "---" {
                return (Self { fields }, &content[consumed..]);
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            // First colon splits key from value; a line without one is
            // skipped, never fatal
            match line.split_once(':') {
                Some((key, value)) => {
                    fields.insert(key.trim().to_string(), value.trim().to_string());
                }
                None => {
                    tracing::warn!("Ignoring front-matter line without a colon: {:?}", line);
                }
            }
        }

        // No closing marker
        (Self::default(), content)
    }

    /// Look up a metadata value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\ntitle: Hello World\ndate: 2026-02-14\ndescription: A post\n---\n\nThis is the content.\n";

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.get("title"), Some("Hello World"));
        assert_eq!(fm.get("date"), Some("2026-02-14"));
        assert_eq!(fm.get("description"), Some("A post"));
        assert_eq!(body, "\nThis is the content.\n");
    }

    #[test]
    fn test_no_frontmatter_is_a_noop() {
        let content = "Just a plain document.\n\nWith two paragraphs.\n";

        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_block_is_treated_as_body() {
        let content = "---\ntitle: Oops\nno closing marker\n";

        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_values_are_trimmed_and_split_on_first_colon() {
        let content = "---\ntitle:   Spaces everywhere   \nurl: https://example.com/page\n---\nbody";

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.get("title"), Some("Spaces everywhere"));
        assert_eq!(fm.get("url"), Some("https://example.com/page"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_blank_and_malformed_lines_are_skipped() {
        let content = "---\ntitle: Ok\n\nthis line has no colon\nlang: ar\n---\nbody";

        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.len(), 2);
        assert_eq!(fm.get("title"), Some("Ok"));
        assert_eq!(fm.get("lang"), Some("ar"));
    }

    #[test]
    fn test_unknown_keys_are_retained() {
        let content = "---\ntitle: Ok\nseries: rust-notes\n---\nbody";

        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.get("series"), Some("rust-notes"));
    }

    #[test]
    fn test_marker_must_open_the_file() {
        let content = "intro line\n---\ntitle: Not metadata\n---\n";

        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_trailing_whitespace_on_markers() {
        let content = "---  \ntitle: Ok\n---  \nbody";

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.get("title"), Some("Ok"));
        assert_eq!(body, "body");
    }
}
