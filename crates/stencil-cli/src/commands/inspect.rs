//! Implementation of the `stencil inspect` command.

use stencil_core::{
    application::{ScanReport, ScanService},
    domain::SchemaDescriptor,
};

use crate::{
    cli::{InspectArgs, InspectFormat, global::GlobalArgs},
    commands::open_source,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: InspectArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let input = args.input.unwrap_or(config.paths.input);
    let scanner = ScanService::new(Box::new(open_source(&input)?), config.conventions);
    let report = scanner.scan()?;

    // `--output-format json` implies the JSON listing.
    let format = if output.is_json() {
        InspectFormat::Json
    } else {
        args.format
    };

    match format {
        InspectFormat::Table => print_table(&report, &output)?,
        InspectFormat::List => {
            for identifier in report.registry.identifiers() {
                output.data(identifier)?;
            }
        }
        InspectFormat::Json => {
            let text = serde_json::to_string_pretty(&report.registry)
                .with_cli_context(|| "Failed to serialise collections")?;
            output.data(&text)?;
        }
    }

    Ok(())
}

fn print_table(report: &ScanReport, output: &OutputManager) -> CliResult<()> {
    if report.registry.is_empty() {
        output.info("No collections found")?;
    } else {
        output.header(&format!("Collections ({}):", report.registry.len()))?;
        for schema in report.registry.iter() {
            output.print(&row(schema))?;
        }
    }

    for failure in &report.failures {
        output.warning(&format!("{}: {}", failure.source_name, failure.error))?;
    }
    for duplicate in &report.duplicates {
        output.warning(&format!("{duplicate}: duplicate identifier, ignored"))?;
    }
    Ok(())
}

/// `  posts  Post  3 fields  public  [slug, status]`
fn row(schema: &SchemaDescriptor) -> String {
    let roles: Vec<&str> = schema
        .capabilities()
        .roles()
        .into_iter()
        .map(|r| r.as_str())
        .collect();
    format!(
        "  {:<20} {:<20} {:>3} fields  {:<7} [{}]",
        schema.identifier(),
        schema.display_name(),
        schema.fields().len(),
        if schema.is_public() { "public" } else { "private" },
        roles.join(", ")
    )
}
