//! # Catalog Subcommands
//!
//! `blueprint modules` lists the planner modules with built-in schemas;
//! `blueprint schema <NAME>` prints one schema in JSON-Schema vocabulary.

use anyhow::{Context, Result};
use clap::Args;

use blueprint_catalog::SchemaRegistry;
use blueprint_core::PlannerModule;

use crate::EXIT_OK;

/// Arguments for the `blueprint schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Module name, e.g. `data_sources`.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Execute the modules subcommand.
pub fn run_modules() -> Result<u8> {
    for module in PlannerModule::all() {
        println!("{:<18} {}", module.as_str(), module.title());
    }
    Ok(EXIT_OK)
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    println!("{}", describe_schema(&args.name)?);
    Ok(EXIT_OK)
}

/// Pretty-printed JSON description of the named module schema.
///
/// # Errors
///
/// Fails if `name` is not a planner module.
pub fn describe_schema(name: &str) -> Result<String> {
    let registry = SchemaRegistry::builtin().context("failed to load built-in schemas")?;
    let module: PlannerModule = name.parse()?;
    let schema = registry
        .get(module.as_str())
        .with_context(|| format!("no schema registered for {module}"))?;
    serde_json::to_string_pretty(&schema.to_json()).context("failed to render schema")
}
