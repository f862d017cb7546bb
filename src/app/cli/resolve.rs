//! Resolve command implementation.

use std::path::Path;

use clap::ValueEnum;

use crate::app::api::ResolveOptions;
use crate::domain::{AppError, ResolutionReport, ResolvedDependency};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn run_resolve(
    project_dir: &Path,
    module: Option<String>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let report = crate::app::api::resolve_at(project_dir, ResolveOptions { module })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }
    Ok(())
}

fn print_text(report: &ResolutionReport) {
    for warning in &report.warnings {
        println!("⚠️  {}", warning);
    }

    for module in &report.modules {
        println!("{}", module.module);
        if module.dependencies.is_empty() {
            println!("  (no dependencies)");
        }
        for dep in &module.dependencies {
            println!("  {}", describe(dep));
        }
    }
}

fn describe(dep: &ResolvedDependency) -> String {
    let mut line = format!("{}:{}", dep.coordinate, dep.selected);
    let others: Vec<&str> = dep
        .requested
        .iter()
        .filter(|v| **v != dep.selected)
        .map(|v| v.as_str())
        .collect();

    let mut notes = Vec::new();
    if dep.forced {
        notes.push("forced".to_string());
    }
    if !others.is_empty() {
        notes.push(format!("requested {}", others.join(", ")));
    }
    if !notes.is_empty() {
        line.push_str(&format!(" ({})", notes.join("; ")));
    }
    line
}
