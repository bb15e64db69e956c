//! sacada-calc - CLI tool to size a balcony enclosure and list its materials.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use sacada_calc::config::DEFAULT_PROJECT_NAME;
use sacada_calc::machining::checklist;
use sacada_calc::report::{format_bom, format_checklist, format_results};
use sacada_calc::{
    recalculate, validate_inputs, Catalog, JsonFileStore, Project, ProjectInputs, ProjectStore,
};

/// Compute panel layout and bill of materials for sliding glass balconies.
#[derive(Parser, Debug)]
#[command(name = "sacada-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project file (project inputs or a full saved project, JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Catalog file with materials, variants, suppliers and prices (JSON)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Price date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Save the recalculated project into this directory
    #[arg(long)]
    save: Option<PathBuf>,

    /// Validate only, don't calculate
    #[arg(long)]
    validate: bool,

    /// Output results and BOM as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    let mut project = read_project(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    // Validate
    let validation = validate_inputs(&project.inputs);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let mut catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => {
            warn!("No catalog given: the BOM will be empty");
            Catalog::default()
        }
    };
    catalog.reconcile_variants();

    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let recalculation = recalculate(&project, &catalog, date)?;

    for part in &recalculation.unmatched_parts {
        warn!("No catalog variant for '{}'", part);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&recalculation)?;
        println!("{}", json);
    } else {
        println!("{} [{} opening]", project.name, project.inputs.geometry);
        println!();
        print!("{}", format_results(&recalculation.results));
        println!();
        print!("{}", format_bom(&recalculation.bom, &catalog));
        println!();
        print!(
            "{}",
            format_checklist(&checklist(
                &project.inputs.params,
                &project.inputs.machining_checklist
            ))
        );
    }

    if let Some(dir) = &args.save {
        project.bom = recalculation.bom;
        project.touch(Utc::now());
        let store = JsonFileStore::open(dir)
            .with_context(|| format!("Failed to open store {}", dir.display()))?;
        store.upsert(&project)?;
        info!("Saved project {} to {}", project.id, store.dir().display());
    }

    Ok(())
}

/// Read a saved project, or bare inputs wrapped in a new project.
fn read_project(path: &Path) -> Result<Project> {
    let content = std::fs::read_to_string(path)?;
    if let Ok(project) = serde_json::from_str::<Project>(&content) {
        return Ok(project);
    }
    let inputs: ProjectInputs = serde_json::from_str(&content)?;
    Ok(Project::with_inputs(DEFAULT_PROJECT_NAME, inputs))
}
