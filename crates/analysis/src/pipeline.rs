//! Sequential section-analysis pipeline.
//!
//! Control flow is a single ordered loop: chunk the document, send one
//! completion request per section, then one final request that merges the
//! section analyses. Requests are never issued concurrently; progress
//! reporting must reflect true position, and the completion service's rate
//! limits are easier to respect with a predictable request cadence.

use lienscope_core::Document;
use lienscope_llm::{LlmError, LlmProvider, Message};
use tracing::{debug, info};

use crate::chunker::{chunk_text, ChunkConfig};
use crate::progress::ProgressObserver;
use crate::prompts;

/// Sampling temperature for every completion request. Fixed low so
/// extraction output stays reproducible.
pub(crate) const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Separator between section analyses in the combine request, so the model
/// can see where one independently-produced analysis ends.
const SECTION_SEPARATOR: &str = "\n---\n";

/// Runs the chunk → analyze → combine pipeline against an injected
/// completion-service provider. Never reads ambient configuration.
pub struct DocumentAnalyzer {
    pub(crate) provider: Box<dyn LlmProvider>,
    chunk_config: ChunkConfig,
    pub(crate) max_tokens: u32,
}

impl DocumentAnalyzer {
    pub fn new(provider: Box<dyn LlmProvider>, chunk_config: ChunkConfig, max_tokens: u32) -> Self {
        Self {
            provider,
            chunk_config,
            max_tokens,
        }
    }

    /// Analyze a document and return the merged report.
    ///
    /// The first failed request aborts the whole run; partial section
    /// analyses are never assembled into a report.
    pub async fn analyze(
        &self,
        document: &Document,
        progress: &dyn ProgressObserver,
    ) -> Result<String, AnalysisError> {
        let sections = chunk_text(document.text(), &self.chunk_config);
        if sections.is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }
        let total = sections.len();
        info!("analyzing document in {} section(s)", total);

        let mut analyses = Vec::with_capacity(total);
        for (i, section_text) in sections.iter().enumerate() {
            let section = i + 1;
            progress.on_section(section, total);
            debug!(
                "analyzing section {} of {} ({} chars)",
                section,
                total,
                section_text.len()
            );

            let messages = vec![
                Message::system(prompts::SECTION_SYSTEM_PROMPT),
                Message::user(format!(
                    "Analyze this section of the document:\n\n{}",
                    section_text
                )),
            ];
            let analysis = self
                .provider
                .complete(messages, ANALYSIS_TEMPERATURE, self.max_tokens)
                .await
                .map_err(|source| AnalysisError::Section {
                    section,
                    total,
                    source,
                })?;
            analyses.push(analysis);
        }

        progress.on_summary();
        let combined = analyses.join(SECTION_SEPARATOR);
        let messages = vec![
            Message::system(prompts::SUMMARY_SYSTEM_PROMPT),
            Message::user(format!(
                "Combine and summarize these analyses:\n\n{}",
                combined
            )),
        ];
        let report = self
            .provider
            .complete(messages, ANALYSIS_TEMPERATURE, self.max_tokens)
            .await
            .map_err(AnalysisError::Summary)?;

        info!("analysis complete ({} chars)", report.len());
        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("document contains no analyzable text")]
    EmptyDocument,

    #[error("analysis of section {section} of {total} failed: {source}")]
    Section {
        section: usize,
        total: usize,
        #[source]
        source: LlmError,
    },

    #[error("combining section analyses failed: {0}")]
    Summary(#[source] LlmError),
}
