//! Implementation of the `stencil generate` command.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{info, instrument};

use stencil_adapters::{BasicFormatter, LocalFilesystem};
use stencil_core::{
    application::{GenerateRequest, GenerateService, GenerationSummary, ScanService},
    domain::EmitTarget,
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands::open_source,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `generate` command.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let input = args.input.clone().unwrap_or_else(|| config.paths.input.clone());
    let request = build_request(&args, &config);

    let source = open_source(&input)?;
    let scanner = ScanService::new(Box::new(source), config.conventions.clone());
    let service = GenerateService::new(
        scanner,
        Box::new(LocalFilesystem::new()),
        Box::new(BasicFormatter::new()),
    );

    info!(input = %input.display(), targets = ?request.targets, "Starting generation");
    let summary = service.generate(&request)?;

    if output.is_json() {
        output.json(&summary_json(&summary))?;
    } else {
        print_summary(&summary, &output)?;
    }

    if args.strict && !summary.failures.is_empty() {
        return Err(CliError::ScanFailed {
            failed: summary.failures.len(),
        });
    }

    Ok(())
}

/// Merge flags over `[paths]`.
fn build_request(args: &GenerateArgs, config: &AppConfig) -> GenerateRequest {
    let output_root = pick(&args.output, &config.paths.output);
    let routes_root = pick(&args.routes, &config.paths.routes);
    let client_module = args
        .client_module
        .clone()
        .unwrap_or_else(|| config.paths.client_module.clone());

    let targets: Vec<EmitTarget> = if args.only.is_empty() {
        EmitTarget::ALL.to_vec()
    } else {
        args.only.iter().copied().map(EmitTarget::from).collect()
    };

    GenerateRequest::new(output_root, routes_root)
        .with_targets(targets)
        .with_client_module(client_module)
        .dry_run(args.dry_run)
        .clean(!args.no_clean)
}

fn pick(flag: &Option<PathBuf>, configured: &Path) -> PathBuf {
    flag.clone().unwrap_or_else(|| configured.to_path_buf())
}

fn print_summary(summary: &GenerationSummary, output: &OutputManager) -> CliResult<()> {
    for warning in &summary.warnings {
        output.warning(warning)?;
    }
    for failure in &summary.failures {
        output.warning(&format!("{}: {}", failure.source_name, failure.error))?;
    }
    for duplicate in &summary.duplicates {
        output.warning(&format!("{duplicate}: duplicate identifier, ignored"))?;
    }

    if summary.schemas.is_empty() {
        output.info("No collections found")?;
    } else {
        output.info(&format!(
            "Found {} collection(s): {}",
            summary.schemas.len(),
            summary.schemas.join(", ")
        ))?;
    }

    let verb = if summary.dry_run { "Would write" } else { "Wrote" };
    if !summary.written.is_empty() {
        output.header(&format!("{verb} {} file(s):", summary.written.len()))?;
        for path in &summary.written {
            output.detail(&path.display().to_string())?;
        }
    }

    if !summary.removed.is_empty() {
        let verb = if summary.dry_run { "Would remove" } else { "Removed" };
        output.header(&format!("{verb} {} stale file(s):", summary.removed.len()))?;
        for path in &summary.removed {
            output.detail(&path.display().to_string())?;
        }
    }

    if summary.dry_run {
        output.info("Dry run, nothing was changed")?;
    } else {
        output.success(&format!(
            "Generation complete ({} written, {} unchanged)",
            summary.written.len(),
            summary.unchanged.len()
        ))?;
    }

    Ok(())
}

fn summary_json(summary: &GenerationSummary) -> serde_json::Value {
    let paths = |list: &[PathBuf]| -> Vec<String> {
        list.iter().map(|p| p.display().to_string()).collect()
    };
    let failures: Vec<_> = summary
        .failures
        .iter()
        .map(|f| json!({ "source": f.source_name, "error": f.error.to_string() }))
        .collect();

    json!({
        "dry_run": summary.dry_run,
        "schemas": summary.schemas,
        "written": paths(&summary.written),
        "unchanged": paths(&summary.unchanged),
        "removed": paths(&summary.removed),
        "skipped": summary.skipped,
        "duplicates": summary.duplicates,
        "failures": failures,
        "warnings": summary.warnings,
    })
}
