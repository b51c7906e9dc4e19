// file: src/parser/markdown.rs
// description: markdown to plain text with pulldown-cmark
// reference: https://docs.rs/pulldown-cmark

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

pub struct MarkdownParser;

impl MarkdownParser {
    pub fn new() -> Self {
        Self
    }

    /// Renders the readable text of a markdown document. Code blocks are
    /// kept, since copied code is as much a match as copied prose; link
    /// targets and image URLs are not.
    pub fn plain_text(&self, content: &str) -> String {
        let mut plain_text = String::new();
        let mut in_image = false;

        for event in Parser::new(content) {
            match event {
                Event::Start(Tag::Image { .. }) => in_image = true,
                Event::End(TagEnd::Image) => in_image = false,
                Event::Text(text) | Event::Code(text) if !in_image => {
                    plain_text.push_str(&text);
                    plain_text.push(' ');
                }
                Event::SoftBreak | Event::HardBreak => plain_text.push('\n'),
                Event::End(TagEnd::Paragraph)
                | Event::End(TagEnd::Heading(_))
                | Event::End(TagEnd::Item)
                | Event::End(TagEnd::CodeBlock) => plain_text.push('\n'),
                _ => {}
            }
        }

        plain_text.trim().to_string()
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parsing() {
        let parser = MarkdownParser::new();
        let text = parser.plain_text("# Title\n\nSome *content* here.");

        assert!(text.starts_with("Title"));
        assert!(text.contains("Some"));
        assert!(text.contains("content"));
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_link_text_kept_url_dropped() {
        let parser = MarkdownParser::new();
        let text = parser.plain_text("[Example](https://example.com) and ![alt](img.png)");

        assert!(text.contains("Example"));
        assert!(!text.contains("example.com"));
        assert!(!text.contains("alt"));
    }

    #[test]
    fn test_code_kept() {
        let parser = MarkdownParser::new();
        let text = parser.plain_text("Call `run()` then:\n\n```\nlet x = 1;\n```");
        assert!(text.contains("run()"));
        assert!(text.contains("let x = 1;"));
    }
}
