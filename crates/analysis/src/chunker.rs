//! Page-aligned greedy chunking of OCR text.
//!
//! Splits on the `--- Page` delimiter the OCR step inserts between pages and
//! packs whole pages into sections bounded by an approximate character
//! budget. A page is never split or dropped: a single page larger than the
//! budget still becomes its own section.

use lienscope_core::PAGE_MARKER_PREFIX;

/// Rough approximation: 1 token ~= 4 characters.
const CHARS_PER_TOKEN: usize = 4;

/// Configuration for the chunking step.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Approximate token budget per section (default: 6000).
    pub max_section_tokens: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_section_tokens: 6000,
        }
    }
}

impl ChunkConfig {
    /// Character budget for one section.
    pub fn max_section_chars(&self) -> usize {
        self.max_section_tokens * CHARS_PER_TOKEN
    }
}

/// Split `text` into page-aligned sections of roughly the configured size.
///
/// Pages are atomic: a section closes only at a page boundary, and a page
/// that alone exceeds the budget still becomes one (oversized) section.
/// Text without any page marker yields exactly one section regardless of
/// length.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<String> {
    let budget = config.max_section_chars();
    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_len = 0usize;

    for fragment in text.split(PAGE_MARKER_PREFIX) {
        if fragment.trim().is_empty() {
            continue;
        }

        // Fragments that followed a marker start with the page number
        // (" 3 ---\n..."). Re-attach the marker so the model still sees the
        // page boundary; only text preceding the first marker lacks it.
        let page = if fragment.starts_with(' ') {
            format!("{}{}", PAGE_MARKER_PREFIX, fragment)
        } else {
            fragment.to_string()
        };
        let page_len = page.len();

        if current_len + page_len > budget && !current.is_empty() {
            chunks.push(current.join("\n"));
            current.clear();
            current_len = 0;
        }

        current.push(page);
        current_len += page_len;
    }

    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for_chars(chars: usize) -> ChunkConfig {
        // Round the char budget up to a whole token count.
        ChunkConfig {
            max_section_tokens: chars.div_ceil(CHARS_PER_TOKEN),
        }
    }

    fn page(n: usize, body: &str) -> String {
        format!("--- Page {} ---\n{}", n, body)
    }

    #[test]
    fn no_marker_yields_single_chunk() {
        let text = "a".repeat(100_000);
        let chunks = chunk_text(&text, &ChunkConfig::default());
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_text("", &ChunkConfig::default()).is_empty());
        assert!(chunk_text("  \n\t\n ", &ChunkConfig::default()).is_empty());
    }

    #[test]
    fn two_small_pages_fit_one_chunk() {
        let text = format!("{}\n{}", page(1, "Address: 123 Main St"), page(2, "Lien: $500"));
        let chunks = chunk_text(&text, &ChunkConfig::default());
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].contains("123 Main St"));
        assert!(chunks[0].contains("$500"));
        assert!(chunks[0].contains("--- Page 2 ---"));
    }

    #[test]
    fn budget_for_two_pages_splits_three_pages_as_two_one() {
        let p1 = page(1, &"a".repeat(50));
        let p2 = page(2, &"b".repeat(50));
        let p3 = page(3, &"c".repeat(50));
        let text = format!("{}\n{}\n{}", p1, p2, p3);

        // Splitting re-attaches markers but drops the joining newline, so the
        // fragment lengths equal the raw page lengths plus one leading "\n"
        // carried at the tail of each non-final page.
        let frag1 = format!("{}\n", p1);
        let frag2 = format!("{}\n", p2);
        let config = config_for_chars(frag1.len() + frag2.len());

        let chunks = chunk_text(&text, &config);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].contains("--- Page 1 ---"));
        assert!(chunks[0].contains("--- Page 2 ---"));
        assert!(!chunks[0].contains("--- Page 3 ---"));
        assert!(chunks[1].contains("--- Page 3 ---"));
    }

    #[test]
    fn oversized_page_still_one_chunk_never_truncated() {
        let big = "x".repeat(5000);
        let text = format!("{}\n{}", page(1, &big), page(2, "small"));
        let config = config_for_chars(100);

        let chunks = chunk_text(&text, &config);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].contains(&big), "oversized page must be kept whole");
        assert!(chunks[1].contains("small"));
    }

    #[test]
    fn page_fragments_preserved_in_order() {
        let bodies = ["alpha", "bravo", "charlie", "delta", "echo"];
        let text = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| page(i + 1, b))
            .collect::<Vec<_>>()
            .join("\n");
        let config = config_for_chars(40);

        let chunks = chunk_text(&text, &config);
        assert!(chunks.len() > 1);

        // Rejoined chunks contain every page body exactly once, in order.
        let rejoined = chunks.join("\n");
        let mut pos = 0;
        for body in &bodies {
            let found = rejoined[pos..]
                .find(body)
                .unwrap_or_else(|| panic!("page body {:?} missing or out of order", body));
            pos += found + body.len();
        }
        for body in &bodies {
            assert_eq!(rejoined.matches(body).count(), 1);
        }
    }

    #[test]
    fn preamble_before_first_marker_keeps_no_marker() {
        let text = format!("COVER SHEET\n{}", page(1, "body"));
        let chunks = chunk_text(&text, &ChunkConfig::default());
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].starts_with("COVER SHEET"));
        assert_eq!(chunks[0].matches(PAGE_MARKER_PREFIX).count(), 1);
    }

    #[test]
    fn blank_page_keeps_its_marker() {
        // A page with no content still carries its marker remnant after the
        // split, so it is retained rather than discarded.
        let text = "--- Page 1 ---\n   \n--- Page 2 ---\nreal content";
        let chunks = chunk_text(text, &ChunkConfig::default());
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].contains("--- Page 1 ---"));
        assert!(chunks[0].contains("real content"));
    }

    #[test]
    fn marker_at_end_of_text_is_discarded() {
        // Nothing but whitespace follows the final marker, so that fragment
        // trims to empty and is dropped.
        let text = "--- Page 1 ---\nbody\n--- Page";
        let chunks = chunk_text(text, &ChunkConfig::default());
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].matches(PAGE_MARKER_PREFIX).count(), 1);
    }
}
