//! Chunk-then-summarize analysis pipeline for foreclosure documents.
//!
//! OCR text is split into page-aligned sections, each section is analyzed by
//! the completion service in strict order, and a final request merges the
//! section analyses into one deduplicated report. The property address can
//! then be extracted from the finished report.

pub mod address;
pub mod chunker;
pub mod pipeline;
pub mod progress;
mod prompts;

pub use address::{AddressError, PropertyAddress};
pub use chunker::{chunk_text, ChunkConfig};
pub use pipeline::{AnalysisError, DocumentAnalyzer};
pub use progress::{NoProgress, ProgressObserver};
