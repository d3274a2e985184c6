mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use lienscope_analysis::{ChunkConfig, DocumentAnalyzer};
use lienscope_core::config::load_dotenv;
use lienscope_core::{Config, Document};
use lienscope_llm::create_provider;

use crate::cli::CliArgs;
use crate::terminal::Terminal;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();
    let terminal = Terminal::new();

    if args.list_profiles {
        for profile in Config::available_profiles() {
            println!("{}", profile);
        }
        return Ok(());
    }

    let config = match &args.profile {
        Some(profile) => Config::for_profile(profile),
        None => Config::from_env(),
    };
    config.log_summary();

    let input = args.input.context("no input file given")?;
    let document = Document::from_file(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let provider = create_provider(&config.llm, &config.ollama)
        .context("failed to create completion provider")?;

    let chunk_config = ChunkConfig {
        max_section_tokens: args
            .max_section_tokens
            .unwrap_or(config.analysis.max_section_tokens),
    };
    let analyzer = DocumentAnalyzer::new(provider, chunk_config, config.llm.max_tokens);

    terminal.print_banner(
        &input.display().to_string(),
        document.page_count(),
        &config.llm.provider,
    )?;

    let report = match analyzer.analyze(&document, &terminal).await {
        Ok(report) => report,
        Err(e) => {
            terminal.print_error(&format!("{}", e))?;
            std::process::exit(1);
        }
    };

    terminal.print_heading("Analysis Results")?;
    terminal.print_report(&report)?;

    // Address extraction failures don't discard the report already produced.
    let address = if args.address {
        match analyzer.extract_address(&report).await {
            Ok(address) => {
                terminal.print_address(&address)?;
                Some(address)
            }
            Err(e) => {
                terminal.print_error(&format!("address extraction failed: {}", e))?;
                None
            }
        }
    } else {
        None
    };

    if let Some(path) = &args.output {
        let mut contents = report.clone();
        if let Some(line) = address.as_ref().and_then(|a| a.single_line()) {
            contents.push_str("\n\nProperty Location:\nAddress: ");
            contents.push_str(&line);
            contents.push('\n');
        }
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("report saved to {}", path.display());
        terminal.print_info(&format!("Report saved to {}", path.display()))?;
    }

    Ok(())
}
