//! Layout command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_layout(project_dir: &Path) -> Result<(), AppError> {
    let layout = crate::app::api::layout_at(project_dir)?;

    println!("Output root: {}", layout.root_output_dir().display());
    let width = layout.modules.iter().map(|m| m.name().as_str().len()).max().unwrap_or(0);
    for module in &layout.modules {
        println!(
            "  {:<width$}  {}",
            module.name().as_str(),
            module.output_dir().display(),
            width = width
        );
    }
    Ok(())
}
