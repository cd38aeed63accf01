use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use abp_ingest::{load_dataset, resolve_data_path};
use abp_model::{Catalog, Dataset, Page};
use abp_validate::{ValidationReport, load_config, validate_dataset};

use crate::cli::{SearchArgs, ShowArgs, ValidateArgs};
use crate::summary::{print_intervention, print_interventions, print_specialties};

pub fn run_validate(
    data: Option<&Path>,
    config: Option<&Path>,
    args: &ValidateArgs,
) -> Result<ValidationReport> {
    let mut config = load_config(config).context("load validation config")?;
    if args.strict {
        config.deny_warnings = true;
    }
    let dataset = load(data)?;

    let span = info_span!("validate", version = %dataset.version);
    let _guard = span.enter();
    let report = validate_dataset(&dataset, &config);
    info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        passed = report.passes(),
        "validation complete"
    );
    Ok(report)
}

pub fn run_specialties(data: Option<&Path>) -> Result<()> {
    let dataset = load(data)?;
    let catalog = Catalog::new(&dataset);
    print_specialties(catalog.specialties());
    Ok(())
}

pub fn run_show(data: Option<&Path>, args: &ShowArgs) -> Result<()> {
    let dataset = load(data)?;
    let catalog = Catalog::new(&dataset);
    let found = catalog
        .intervention(&args.id)
        .ok_or_else(|| anyhow!("intervention not found: {}", args.id))?;
    print_intervention(&found);
    Ok(())
}

pub fn run_search(data: Option<&Path>, args: &SearchArgs) -> Result<()> {
    let dataset = load(data)?;
    let catalog = Catalog::new(&dataset);
    let matches = catalog.search(&args.term, Page::new(args.skip, args.limit));
    print_interventions(&matches);
    Ok(())
}

pub fn run_molecule(data: Option<&Path>, args: &SearchArgs) -> Result<()> {
    let dataset = load(data)?;
    let catalog = Catalog::new(&dataset);
    let matches = catalog.by_molecule(&args.term, Page::new(args.skip, args.limit));
    print_interventions(&matches);
    Ok(())
}

fn load(data: Option<&Path>) -> Result<Dataset> {
    let path = resolve_data_path(data);
    load_dataset(&path).context("load dataset")
}
