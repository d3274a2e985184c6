use std::path::Path;

use crate::error::LienscopeError;

/// Literal prefix of the page delimiter the OCR step inserts between pages
/// ("--- Page N ---"). The chunker splits on this exact string, so it is a
/// contract with whatever produced the text.
pub const PAGE_MARKER_PREFIX: &str = "--- Page";

/// Raw OCR text of one legal document. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read document text from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self, LienscopeError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the document holds no text beyond whitespace.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of page markers in the text. A non-empty document without
    /// markers counts as a single page.
    pub fn page_count(&self) -> usize {
        let markers = self.text.matches(PAGE_MARKER_PREFIX).count();
        if markers == 0 && !self.is_empty() {
            1
        } else {
            markers
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_counts_markers() {
        let doc = Document::new("--- Page 1 ---\nfoo\n--- Page 2 ---\nbar");
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn page_count_without_markers_is_one() {
        let doc = Document::new("plain text, no markers");
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn empty_document_has_zero_pages() {
        let doc = Document::new("  \n\t ");
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
    }
}
