use anyhow::Result;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

use lienscope_analysis::{ProgressObserver, PropertyAddress};

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const HEADING: Color = Color::Magenta;
    const REPORT: Color = Color::Cyan;
    const PROGRESS: Color = Color::Yellow;
    const ERROR: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
}

/// Formats pipeline output for the terminal.
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Print the startup banner.
    pub fn print_banner(&self, filename: &str, pages: usize, provider: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADING),
            Print("lienscope"),
            ResetColor,
            Print(" - Foreclosure Document Analyzer\n"),
            SetForegroundColor(Colors::DIM),
            Print(format!(
                "Document: {} ({} page{}) | Provider: {}\n",
                filename,
                pages,
                if pages == 1 { "" } else { "s" },
                provider
            )),
            Print("---\n"),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print a section heading.
    pub fn print_heading(&self, heading: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Colors::HEADING),
            Print(format!("### {}\n\n", heading)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print the analysis report body.
    pub fn print_report(&self, report: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::REPORT),
            Print(report),
            Print("\n"),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print the extracted address block.
    pub fn print_address(&self, address: &PropertyAddress) -> Result<()> {
        self.print_heading("Property Location")?;
        let mut stdout = io::stdout();
        let line = address
            .single_line()
            .unwrap_or_else(|| "(no street address found)".to_string());
        execute!(stdout, Print(format!("Address: {}\n", line)))?;
        if !address.is_complete() {
            execute!(
                stdout,
                SetForegroundColor(Colors::DIM),
                Print("Some address components were not found in the document.\n"),
                ResetColor,
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print a dim informational line.
    pub fn print_info(&self, message: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::DIM),
            Print(format!("{}\n", message)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print an error message.
    pub fn print_error(&self, message: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::ERROR),
            Print(format!("Error: {}\n", message)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }
}

/// Live progress lines for the sequential pipeline. Matches the analyzer's
/// cadence: one line per section (skipped for single-section documents),
/// then one for the combine step.
impl ProgressObserver for Terminal {
    fn on_section(&self, section: usize, total: usize) {
        if total <= 1 {
            return;
        }
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            SetForegroundColor(Colors::PROGRESS),
            Print(format!("Analyzing section {} of {}\n", section, total)),
            ResetColor,
        );
        let _ = stdout.flush();
    }

    fn on_summary(&self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            SetForegroundColor(Colors::PROGRESS),
            Print("Combining section analyses...\n"),
            ResetColor,
        );
        let _ = stdout.flush();
    }
}
