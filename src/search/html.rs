// file: src/search/html.rs
// description: reduces fetched HTML pages to visible paragraph text
// reference: tag stripping with block removal for non-content elements

const DROPPED_BLOCKS: [&str; 4] = ["script", "style", "noscript", "head"];

/// Strips markup from `input`, dropping non-content blocks and comments,
/// decoding the common entities and collapsing whitespace.
pub fn html_to_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut buf = remove_comments(input);
    for tag in DROPPED_BLOCKS {
        buf = remove_block(&buf, tag);
    }

    let mut out = String::with_capacity(buf.len());
    let mut in_tag = false;
    for ch in buf.chars() {
        match ch {
            '<' => {
                in_tag = true;
                // tags separate words: "<p>a</p><p>b</p>" must not read "ab"
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    collapse_whitespace(&decode_entities(&out))
}

fn remove_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Removes every `<tag ...>...</tag>` block, case-insensitively. An
/// unterminated block runs to the end of the input.
fn remove_block(input: &str, tag: &str) -> String {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);
    // ASCII lowercasing keeps byte offsets aligned with `input`
    let lower = input.to_ascii_lowercase();

    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(rel) = find_open_tag(&lower[cursor..], &open) {
        let start = cursor + rel;
        out.push_str(&input[cursor..start]);
        match lower[start..].find(&close) {
            Some(end_rel) => cursor = start + end_rel + close.len(),
            None => return out,
        }
    }
    out.push_str(&input[cursor..]);
    out
}

/// Finds `open` only where it is a whole tag name, so `<head` does not
/// match `<header`.
fn find_open_tag(haystack: &str, open: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(rel) = haystack[offset..].find(open) {
        let pos = offset + rel;
        let next = haystack[pos + open.len()..].chars().next();
        match next {
            Some(c) if c.is_ascii_alphanumeric() || c == '-' => offset = pos + open.len(),
            _ => return Some(pos),
        }
    }
    None
}

fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    input
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
