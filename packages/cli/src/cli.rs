//! Command-line interface for rslkit.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use tracing::debug;

use rslkit_engine::builder::build_document;
use rslkit_engine::embed::{html_head_link, robots_directive};
use rslkit_engine::factory::{create_license, LicenseOptions};
use rslkit_engine::parser::parse_document;
use rslkit_engine::types::Content;
use rslkit_engine::validator::{validate, Severity, ValidationStrategy};

use crate::error::{CliError, Result};
use crate::output::write_atomic;

/// rslkit - author, validate and format RSL license documents.
#[derive(Parser)]
#[command(name = "rslkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter RSL document for one or more content URLs.
    Init {
        /// Content URLs to license
        #[arg(required = true)]
        urls: Vec<String>,

        /// License archetype: free, commercial, educational, research
        #[arg(short, long, default_value = "free")]
        license_type: String,

        /// Price amount (commercial licenses)
        #[arg(long)]
        amount: Option<String>,

        /// Price currency (commercial licenses)
        #[arg(long)]
        currency: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate an RSL document and report findings.
    Validate {
        /// Path to the RSL XML document
        file: PathBuf,

        /// Run semantic checks in addition to structural ones
        #[arg(short, long)]
        comprehensive: bool,
    },

    /// Re-emit an RSL document in canonical form.
    Format {
        /// Path to the RSL XML document
        file: PathBuf,

        /// Rewrite the file in place instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// Print an embedding snippet for a published RSL document.
    Embed {
        #[command(subcommand)]
        target: EmbedTarget,
    },
}

#[derive(Subcommand)]
pub enum EmbedTarget {
    /// robots.txt License directive
    Robots {
        /// URL of the published RSL document
        license_url: String,
    },

    /// HTML head link tag
    Html {
        /// URL of the published RSL document
        license_url: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            urls,
            license_type,
            amount,
            currency,
            output,
        } => init_command(&urls, &license_type, amount, currency, output.as_deref()),
        Commands::Validate {
            file,
            comprehensive,
        } => validate_command(&file, comprehensive),
        Commands::Format { file, write } => format_command(&file, write),
        Commands::Embed { target } => {
            match target {
                EmbedTarget::Robots { license_url } => print!("{}", robots_directive(&license_url)),
                EmbedTarget::Html { license_url } => println!("{}", html_head_link(&license_url)),
            }
            Ok(())
        }
    }
}

/// Execute the init command: one content entry per URL, each with one
/// freshly created license.
fn init_command(
    urls: &[String],
    license_type: &str,
    amount: Option<String>,
    currency: Option<String>,
    output: Option<&Path>,
) -> Result<()> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let options = LicenseOptions {
        name: Some("License Option 1".to_string()),
        amount,
        currency,
        ..LicenseOptions::default()
    };

    let mut contents = Vec::with_capacity(urls.len());
    for url in urls {
        let mut content =
            Content::new(url.as_str()).with_license(create_license(license_type, &options)?);
        content.data.last_modified = Some(today.clone());
        contents.push(content);
    }

    let xml = build_document(&contents);

    match output {
        Some(path) => {
            write_atomic(path, &xml)?;
            println!(
                "{} {} ({} content entries)",
                style("Saved:").green().bold(),
                path.display(),
                contents.len()
            );
        }
        None => print!("{xml}"),
    }

    Ok(())
}

/// Execute the validate command. Findings go to stdout; the exit status
/// reflects whether any error-severity findings exist.
fn validate_command(file: &Path, comprehensive: bool) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let contents = parse_document(&xml, "");
    debug!("parsed {} content entries from {}", contents.len(), file.display());

    let strategy = if comprehensive {
        ValidationStrategy::Comprehensive
    } else {
        ValidationStrategy::Basic
    };
    let report = validate(&contents, strategy);

    for finding in report.findings() {
        let label = match finding.severity {
            Severity::Error => style("error").red().bold(),
            Severity::Warning => style("warning").yellow().bold(),
            Severity::Info => style("info").cyan(),
        };
        println!("{label}: {}", finding.message);
    }

    if report.is_valid() {
        println!(
            "{} {} ({} content entries, {} warnings)",
            style("Valid:").green().bold(),
            file.display(),
            contents.len(),
            report.warnings().count()
        );
        Ok(())
    } else {
        Err(CliError::InvalidDocument(report.errors().count()))
    }
}

/// Execute the format command: parse and re-emit in canonical form.
fn format_command(file: &Path, write: bool) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let canonical = build_document(&parse_document(&xml, ""));

    if write {
        write_atomic(file, &canonical)?;
        println!("{} {}", style("Formatted:").green().bold(), file.display());
    } else {
        print!("{canonical}");
    }

    Ok(())
}
