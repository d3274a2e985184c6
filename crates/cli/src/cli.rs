use clap::Parser;
use std::path::PathBuf;

/// Foreclosure document analyzer.
///
/// Reads OCR-extracted text (with "--- Page N ---" markers between pages)
/// and produces a consolidated analysis report via the configured
/// completion service.
#[derive(Parser, Debug)]
#[command(name = "lienscope", version, about = "Analyze foreclosure documents")]
pub struct CliArgs {
    /// Path to the OCR text file to analyze.
    #[arg(required_unless_present = "list_profiles")]
    pub input: Option<PathBuf>,

    /// Write the report (and address, when extracted) to this file.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also extract the property address from the report.
    #[arg(long)]
    pub address: bool,

    /// Approximate token budget per analyzed section.
    #[arg(long)]
    pub max_section_tokens: Option<usize>,

    /// Config profile to use (overrides LIENSCOPE_PROFILE).
    #[arg(long)]
    pub profile: Option<String>,

    /// List config profiles discovered in the environment.
    #[arg(long)]
    pub list_profiles: bool,
}
