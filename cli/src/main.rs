//! CLI entrypoint for subtype-consensus
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use subtype_application::{
    ErrorCategory, ModelService, ProgressNotifier, RunEnsembleInput, RunEnsembleUseCase,
};
use subtype_domain::{ClassLabels, ClinicalInput, OutputFormat};
use subtype_infrastructure::{ConfigLoader, FileConfig, ModelRegistryLoader};
use subtype_presentation::{
    Cli, ModelInfoResponse, ProgressReporter, SimpleProgress, formatter_for, read_clinical_input,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    if cli.example {
        println!("{}", serde_json::to_string_pretty(&ClinicalInput::example())?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let registry = ModelRegistryLoader::load(&config.model_sources());
    info!("Loaded {} models", registry.len());
    let service = Arc::new(ModelService::new(registry, ClassLabels::cancer_subtypes()));

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter = formatter_for(format);

    if cli.model_info {
        let info = ModelInfoResponse::new(service.describe(), service.labels());
        println!("{}", formatter.format_model_info(&info));
        return Ok(());
    }

    let input_path = match &cli.input {
        Some(path) => path,
        None => bail!("Input is required. Pass a JSON file, `-` for stdin, or --example for a template."),
    };
    let features = read_clinical_input(input_path)?
        .encode()
        .context("Invalid clinical record")?;

    // Single model mode
    if let Some(model_name) = &cli.model {
        let record = match service.predict_with_model(model_name, &features) {
            Ok(record) => record,
            Err(e) if e.category() == ErrorCategory::Client => {
                bail!(
                    "{}. Available models: {}",
                    e,
                    service.registry().names().join(", ")
                )
            }
            Err(e) => return Err(e.into()),
        };
        println!("{}", formatter.format_prediction(&record));
        return Ok(());
    }

    let mut input = RunEnsembleInput::new(features)
        .with_parallel(cli.parallel || config.ensemble.parallel);
    if cli.no_consensus || !config.ensemble.consensus {
        input = input.without_consensus();
    }

    let use_case = RunEnsembleUseCase::new(service);
    let report = if cli.quiet || format == OutputFormat::Json {
        use_case.execute(input).await?
    } else {
        let progress: Box<dyn ProgressNotifier> = if cli.verbose > 0 {
            Box::new(SimpleProgress)
        } else {
            Box::new(ProgressReporter::new())
        };
        use_case.execute_with_progress(input, progress.as_ref()).await?
    };

    let output = match format {
        OutputFormat::Summary => formatter.format_summary(&report),
        OutputFormat::Full | OutputFormat::Json => formatter.format(&report),
    };
    println!("{}", output);

    Ok(())
}

/// Load and validate the configuration, honoring --no-config and --config
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    let errors = issues.iter().filter(|issue| issue.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }

    Ok(config)
}
