//! PII Redaction CLI Application.
//!
//! Reads text (or the text layer of a PDF), replaces personal identifiers
//! with placeholder labels, and writes text or a rendered PDF.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use pii_redactor::document::{source_for_path, TextSource};
use pii_redactor::{OutputFormat, RedactionReport, RedactionService, RedactorConfig};

/// PII Redaction Tool
///
/// Replace emails, phone numbers, ID numbers, dates, addresses and names
/// with placeholder labels.
#[derive(Parser)]
#[command(name = "redactor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Redact a text or PDF file (stdin/stdout by default)
    Redact {
        /// Input file; `.pdf` files are read through their text layer
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file; `.pdf` renders a document, anything else gets text
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print per-rule replacement counts to stderr
        #[arg(long)]
        report: bool,
    },

    /// Extract text from a PDF (for debugging and verification)
    Extract {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a text file as a PDF
    Render {
        /// Input text file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Redact the text before rendering
        #[arg(long)]
        redact: bool,
    },

    /// Show the active redaction rules in application order
    Rules {
        /// Print the effective configuration as TOML, loadable with `--config`
        #[arg(long)]
        toml: bool,
    },
}

/// Command handler holding the configured service.
struct RedactionHandler {
    service: RedactionService,
}

impl RedactionHandler {
    fn new(config: &RedactorConfig) -> Result<Self> {
        let service =
            RedactionService::from_config(config).context("Failed to build redaction rules")?;
        Ok(Self { service })
    }

    fn redact(&self, input: Option<&Path>, output: Option<&Path>, report: bool) -> Result<()> {
        let text = match input {
            Some(path) => self.read_document(path)?,
            None => read_stdin()?,
        };

        let outcome = self
            .service
            .redact_text(&text)
            .with_context(|| "Redaction failed")?;

        match output {
            Some(path) if OutputFormat::for_path(path) == OutputFormat::Pdf => {
                self.service
                    .render_to(&outcome.text, path)
                    .with_context(|| format!("Failed to render {}", path.display()))?;
            }
            Some(path) => {
                std::fs::write(path, &outcome.text)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(outcome.text.as_bytes())?;
                stdout.flush()?;
            }
        }

        if report {
            print_report(&outcome.report);
        }
        if let Some(path) = output {
            eprintln!(
                "✓ Redacted {} instance(s) → {}",
                outcome.report.total_replaced(),
                path.display()
            );
        }

        Ok(())
    }

    fn extract(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        let text = self.read_document(input)?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &text)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            eprintln!(
                "✓ Extracted {} characters → {}",
                text.len(),
                output_path.display()
            );
        } else {
            println!("{}", text);
        }

        Ok(())
    }

    fn render(&self, input: &Path, output: &Path, redact: bool) -> Result<()> {
        let text = self.read_document(input)?;
        if text.trim().is_empty() {
            anyhow::bail!("Input {} contains no text to render", input.display());
        }

        let text = if redact {
            self.service
                .redact_text(&text)
                .with_context(|| "Redaction failed")?
                .text
        } else {
            text
        };

        self.service
            .render_to(&text, output)
            .with_context(|| format!("Failed to render {}", output.display()))?;
        eprintln!("✓ Rendered PDF → {}", output.display());
        Ok(())
    }

    fn rules(&self, config: &RedactorConfig, toml: bool) -> Result<()> {
        if toml {
            let dump = config
                .resolved()
                .to_toml_string()
                .map_err(anyhow::Error::msg)
                .context("Failed to serialize rules")?;
            print!("{}", dump);
            return Ok(());
        }

        for (index, (stage, label)) in self.service.redactor().stage_labels().iter().enumerate() {
            println!("{:>2}. {:<18} {}", index + 1, stage, label);
        }
        Ok(())
    }

    fn read_document(&self, path: &Path) -> Result<String> {
        let source: Box<dyn TextSource> = source_for_path(path);
        self.service
            .extract_text(path, source.as_ref())
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    String::from_utf8(bytes).context("Input on stdin is not valid UTF-8")
}

fn print_report(report: &RedactionReport) {
    eprintln!("Redaction Summary:");
    for stage in report.stages.iter().filter(|s| s.replaced > 0) {
        eprintln!("  {:<18} {}", stage.stage, stage.replaced);
    }
    eprintln!("  Total: {}", report.total_replaced());
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<RedactorConfig> {
    match path {
        Some(path) => RedactorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(RedactorConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let handler = RedactionHandler::new(&config)?;

    match &cli.command {
        Commands::Redact {
            input,
            output,
            report,
        } => handler.redact(input.as_deref(), output.as_deref(), *report)?,
        Commands::Extract { input, output } => handler.extract(input, output.as_deref())?,
        Commands::Render {
            input,
            output,
            redact,
        } => handler.render(input, output, *redact)?,
        Commands::Rules { toml } => handler.rules(&config, *toml)?,
    }

    Ok(())
}
