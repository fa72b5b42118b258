mod cli;

use clap::Parser;
use log::{error, warn};
use netfabric::{FilterCriterion, Result};
use serde::Serialize;
use std::process::exit;

/*-------------------------------------------------------------------------------------------------
  Main CLI Entry Point
-------------------------------------------------------------------------------------------------*/

fn main() {
    let args = cli::Args::parse();

    stderrlog::new()
        .verbosity(args.verbose.log_level_filter())
        .init()
        .unwrap();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(err) => {
            error!("{err}");
            exit(2);
        }
    }
}

/*--------------------------------------------------------------------------------------
  Run
--------------------------------------------------------------------------------------*/

/// Fetch the inventory, apply the filter criteria, and render the requested resource
/// collection. Returns `Ok(false)` when criteria were supplied and matched nothing.
fn run(args: &cli::Args) -> Result<bool> {
    let inventory = netfabric::Client::new().get_inventory()?;
    let criteria = cli::build_criteria(args)?;

    let Some(resource) = args.resource else {
        if !criteria.is_empty() {
            warn!("Filter criteria are ignored without a resource collection");
        }
        cli::output::inventory_summary(&inventory);
        return Ok(true);
    };

    match resource {
        cli::ResourceKind::Accounts => render(
            &inventory.filter_accounts(&criteria)?,
            inventory.accounts().len(),
            &criteria,
            args,
        ),
        cli::ResourceKind::Networks => render(
            &inventory.filter_networks(&criteria)?,
            inventory.networks().len(),
            &criteria,
            args,
        ),
        cli::ResourceKind::Connections => render(
            &inventory.filter_connections(&criteria)?,
            inventory.connections().len(),
            &criteria,
            args,
        ),
        cli::ResourceKind::Locations => render(
            &inventory.filter_locations(&criteria)?,
            inventory.locations().len(),
            &criteria,
            args,
        ),
        cli::ResourceKind::CloudRegions => render(
            &inventory.filter_cloud_regions(&criteria)?,
            inventory.cloud_regions().len(),
            &criteria,
            args,
        ),
        cli::ResourceKind::CloudServices => render(
            &inventory.filter_cloud_services(&criteria)?,
            inventory.cloud_services().len(),
            &criteria,
            args,
        ),
    }
}

/*--------------------------------------------------------------------------------------
  Render
--------------------------------------------------------------------------------------*/

fn render<T>(
    records: &[T],
    total: usize,
    criteria: &[FilterCriterion],
    args: &cli::Args,
) -> Result<bool>
where
    T: cli::output::Tabular + Serialize,
{
    cli::log::filter_results(criteria, records.len(), total);

    match args.output {
        cli::OutputFormat::Table => cli::output::resource_table(records, args.summary),
        cli::OutputFormat::Json => cli::output::json(records)?,
        cli::OutputFormat::Ids => cli::output::ids(records),
        cli::OutputFormat::Names => cli::output::names(records),
    }

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(records, csv_file)?;
    }

    Ok(criteria.is_empty() || !records.is_empty())
}
