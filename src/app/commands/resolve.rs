use crate::app::AppContext;
use crate::app::commands::layout;
use crate::domain::{AppError, ModuleNode, ResolutionReport};
use crate::ports::PackageSource;
use crate::services::{DependencyResolver, VersionPinner};

#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Resolve only this module.
    pub module: Option<String>,
}

/// Resolve modules in evaluation order with the project's forced versions applied.
pub fn execute<S: PackageSource>(
    ctx: &AppContext<S>,
    options: ResolveOptions,
) -> Result<ResolutionReport, AppError> {
    let layout = layout::execute(ctx)?;

    let targets: Vec<&ModuleNode> = match &options.module {
        Some(name) => {
            let module = layout.module(name).ok_or_else(|| AppError::ModuleNotFound {
                name: name.clone(),
                available: ctx.config().module_names().join(", "),
            })?;
            vec![module]
        }
        None => layout.modules.iter().collect(),
    };

    let pinner = VersionPinner::new(ctx.config().override_table());
    let modules = targets
        .into_iter()
        .map(|module| DependencyResolver::resolve(module, &pinner, ctx.sources()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolutionReport { modules, warnings: pinner.warnings() })
}
