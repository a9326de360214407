//! # Validate Subcommand
//!
//! Validates planner module documents against the built-in schemas.
//!
//! A single document is matched to its module by `--module` or, failing
//! that, by its file stem (`security.yaml` is a `security` document). With
//! `--dir`, every `<module>.yaml|yml|json` found in the directory is
//! validated; modules without a document are skipped.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use blueprint_catalog::SchemaRegistry;
use blueprint_core::PlannerModule;
use blueprint_schema::ValidationResult;

use crate::config::{CliConfig, OutputFormat};
use crate::input::load_document;
use crate::{resolve_path, EXIT_ERROR, EXIT_INVALID, EXIT_OK};

/// Document extensions probed by `--dir`, in preference order.
const DOCUMENT_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Arguments for the `blueprint validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to validate (YAML or JSON).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Module schema to validate against. Defaults to the file stem.
    #[arg(long, short)]
    pub module: Option<String>,

    /// Validate every module document found in this directory.
    #[arg(long, value_name = "DIR", conflicts_with_all = ["path", "module"])]
    pub dir: Option<PathBuf>,

    /// Report format. Overrides the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat warnings as failures.
    #[arg(long, overrides_with = "no_deny_warnings")]
    pub deny_warnings: bool,

    /// Report warnings without failing, even when the config file sets
    /// `deny_warnings`.
    #[arg(long, overrides_with = "deny_warnings")]
    pub no_deny_warnings: bool,
}

impl ValidateArgs {
    /// Whether warnings fail a document: command-line flags first, then the
    /// config file.
    pub fn effective_deny_warnings(&self, config: &CliConfig) -> bool {
        if self.no_deny_warnings {
            false
        } else {
            self.deny_warnings || config.deny_warnings
        }
    }
}

/// Outcome of validating one document.
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    /// Where the document was read from.
    pub path: PathBuf,
    /// The module schema it was checked against.
    pub module: PlannerModule,
    /// Errors and warnings.
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl DocumentReport {
    /// Whether this document counts as passing.
    pub fn passed(&self, deny_warnings: bool) -> bool {
        self.result.is_valid() && !(deny_warnings && !self.result.warnings().is_empty())
    }
}

/// JSON form of a report: `passed` reflects `--deny-warnings`, while
/// `isValid` only reflects errors.
#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    #[serde(flatten)]
    report: &'a DocumentReport,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure, 2 on usage error.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let registry = SchemaRegistry::builtin().context("failed to load built-in schemas")?;
    let format = args.format.unwrap_or(config.format);
    let deny_warnings = args.effective_deny_warnings(config);
    let base = config
        .documents_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let reports = if let Some(dir) = &args.dir {
        validate_dir(&registry, &resolve_path(dir, &base))?
    } else if let Some(path) = &args.path {
        let path = resolve_path(path, &base);
        vec![validate_file(&registry, &path, args.module.as_deref())?]
    } else {
        println!("Usage: blueprint validate [--module NAME] PATH | --dir DIR");
        return Ok(EXIT_ERROR);
    };

    let failed = reports.iter().filter(|r| !r.passed(deny_warnings)).count();
    tracing::info!(
        documents = reports.len(),
        failed,
        deny_warnings,
        "validation finished"
    );

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", render_text(report, deny_warnings));
            }
            if args.dir.is_some() {
                println!(
                    "Documents: {}/{} passed",
                    reports.len() - failed,
                    reports.len()
                );
            }
        }
        OutputFormat::Json => {
            let rendered = render_json(&reports, args.dir.is_some(), deny_warnings)
                .context("failed to render JSON report")?;
            println!("{rendered}");
        }
    }

    Ok(if failed > 0 { EXIT_INVALID } else { EXIT_OK })
}

/// Validate one document file.
///
/// # Errors
///
/// Fails if the module cannot be determined, the file cannot be loaded, or
/// the module schema is unavailable.
pub fn validate_file(
    registry: &SchemaRegistry,
    path: &Path,
    module: Option<&str>,
) -> Result<DocumentReport> {
    let module = match module {
        Some(name) => name.parse::<PlannerModule>()?,
        None => infer_module(path)?,
    };
    let value = load_document(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let result = registry.validate_module(module, &value)?;
    Ok(DocumentReport {
        path: path.to_path_buf(),
        module,
        result,
    })
}

/// Validate every module document present in `dir`, in workflow order.
///
/// # Errors
///
/// Fails if `dir` is not a directory, holds no module documents, or any
/// found document cannot be loaded.
pub fn validate_dir(registry: &SchemaRegistry, dir: &Path) -> Result<Vec<DocumentReport>> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }

    let mut reports = Vec::new();
    for module in PlannerModule::all() {
        match find_document(dir, *module) {
            Some(path) => {
                reports.push(validate_file(registry, &path, Some(module.as_str()))?);
            }
            None => tracing::info!(%module, dir = %dir.display(), "no document for module"),
        }
    }

    if reports.is_empty() {
        bail!("no planner module documents found in {}", dir.display());
    }
    Ok(reports)
}

/// The first `<module>.<ext>` file in `dir`.
pub fn find_document(dir: &Path, module: PlannerModule) -> Option<PathBuf> {
    DOCUMENT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{ext}", module.as_str())))
        .find(|p| p.is_file())
}

fn infer_module(path: &Path) -> Result<PlannerModule> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    stem.parse::<PlannerModule>().with_context(|| {
        format!(
            "cannot infer module from file name {}; pass --module",
            path.display()
        )
    })
}

/// A JSON array of reports for `--dir`, otherwise the single report object.
fn render_json(
    reports: &[DocumentReport],
    as_array: bool,
    deny_warnings: bool,
) -> serde_json::Result<String> {
    let rendered: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|report| JsonReport {
            passed: report.passed(deny_warnings),
            report,
        })
        .collect();
    match rendered.as_slice() {
        [single] if !as_array => serde_json::to_string_pretty(single),
        all => serde_json::to_string_pretty(all),
    }
}

fn render_text(report: &DocumentReport, deny_warnings: bool) -> String {
    let status = if report.passed(deny_warnings) { "OK" } else { "FAIL" };
    let mut out = format!("{status}: {} [{}]", report.path.display(), report.module);
    for e in report.result.errors() {
        out.push_str(&format!("\n  error: {e}"));
    }
    for w in report.result.warnings() {
        out.push_str(&format!("\n  warning: {w}"));
    }
    out
}
