//! Output formatting for the command loop

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
///
/// Results and errors go to the wrapped sink; verbose diagnostics go to
/// stderr so they never mix with results.
pub struct Output<W: Write> {
    writer: W,
    format: OutputFormat,
    verbose: bool,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, format: OutputFormat, verbose: bool) -> Self {
        Self {
            writer,
            format,
            verbose,
        }
    }

    /// Prints an error message
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "Error: {}", message),
            OutputFormat::Json => self.json(&serde_json::json!({
                "success": false,
                "error": message
            })),
        }
    }

    /// Prints structured data as one JSON line (JSON only, ignored in text mode)
    pub fn data<T: Serialize>(&mut self, data: &T) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            self.json(data)?;
        }
        Ok(())
    }

    /// Prints a line (text only, ignored in JSON mode)
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.writer, "{}", text)?;
        }
        Ok(())
    }

    /// Prints a prompt without a trailing newline (text only)
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            write!(self.writer, "{}", text)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }

    /// Flushes the sink
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Returns the wrapped sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn json<T: Serialize + ?Sized>(&mut self, data: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, data)?;
        writeln!(self.writer)
    }
}
