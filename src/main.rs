//! Application entry point — Care Navigator CLI.
//!
//! # Startup sequence
//!
//! 1. Parse command-line arguments.
//! 2. Initialise logging.
//! 3. Load [`AppConfig`] (returns default when the file is missing).
//! 4. Load the diagnosis document, if one was given, and publish it to the
//!    [`DiagnosisStores`].
//! 5. Resolve the map view through the [`Navigator`] and print it.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use care_navigator::{
    config::{AppConfig, OutputFormat},
    diagnosis::{DiagnosisError, DiagnosisResponse, DiagnosisStores},
    navigator::{MapView, Navigator, QueryOverrides},
    specialty::{self, MatchMode, SpecialtyClassifier},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "care-navigator")]
#[command(about = "Find the right kind of nearby care for a diagnosis")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Diagnosis response JSON file, or `-` for stdin
    #[arg(long)]
    diagnosis: Option<PathBuf>,

    /// Specialty hint used when the diagnosis carries none
    #[arg(long)]
    hint: Option<String>,

    /// Override the places search keyword
    #[arg(long)]
    keyword: Option<String>,

    /// Override the places category
    #[arg(long)]
    place_type: Option<String>,

    /// Override the result title
    #[arg(long)]
    title: Option<String>,

    /// Override the result highlight
    #[arg(long)]
    highlight: Option<String>,

    /// Require keywords to match whole words
    #[arg(long)]
    word_boundary: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the specialty rule table
    Rules,
}

fn load_diagnosis(path: &Path) -> Result<DiagnosisResponse, DiagnosisError> {
    if path == Path::new("-") {
        DiagnosisResponse::from_reader(io::stdin().lock())
    } else {
        DiagnosisResponse::load_from(path)
    }
}

fn print_rules(format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, specialty::rules())?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (i, rule) in specialty::rules().iter().enumerate() {
                writeln!(
                    out,
                    "{:>2}. {:<28} {} [{}]",
                    i + 1,
                    rule.specialty.label(),
                    rule.profile.keyword,
                    rule.profile.place_type
                )?;
                writeln!(out, "    triggers: {}", rule.keywords.join(", "))?;
            }
            let fallback = specialty::default_profile();
            writeln!(
                out,
                " -. {:<28} {} [{}]",
                specialty::Specialty::General.label(),
                fallback.keyword,
                fallback.place_type
            )?;
        }
    }
    Ok(())
}

fn print_view(view: &MapView, format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, view)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", view.config.title)?;
            writeln!(out, "{}", view.config.highlight)?;
            writeln!(
                out,
                "search: keyword={:?} type={}",
                view.config.keyword, view.config.place_type
            )?;
            if let Some(specialty) = view.specialty {
                writeln!(out, "specialty: {specialty}")?;
            }
            writeln!(out)?;
            writeln!(out, "{}", view.description)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Configuration
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    let format = cli.format.unwrap_or(config.output.format);

    if let Some(Commands::Rules) = cli.command {
        return print_rules(format);
    }

    // Stores + navigator
    let stores = DiagnosisStores::new();
    let subscription = stores.response.subscribe(|response: Option<&DiagnosisResponse>| {
        if let Some(response) = response {
            log::info!(
                "diagnosis received: {} condition(s)",
                response.conditions().len()
            );
        }
    });

    let classifier = if cli.word_boundary {
        SpecialtyClassifier::new(MatchMode::WordBoundary)
    } else {
        SpecialtyClassifier::from_config(&config.classifier)
    };
    let navigator = Navigator::new(stores.clone(), classifier, config.map.clone());

    // Diagnosis (a failed load degrades to "no diagnosis")
    if let Some(path) = &cli.diagnosis {
        match load_diagnosis(path) {
            Ok(response) => stores.publish(response),
            Err(e) => log::warn!("Could not load diagnosis ({e}); continuing without one"),
        }
    }

    let overrides = QueryOverrides {
        keyword: cli.keyword,
        place_type: cli.place_type,
        title: cli.title,
        highlight: cli.highlight,
        hint: cli.hint,
    };
    let view = navigator.resolve(&overrides);
    if !subscription.unsubscribe() {
        log::warn!("diagnosis listener was already removed");
    }

    print_view(&view, format)
}
