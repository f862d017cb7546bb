use serde::Serialize;

use crate::domain::{Coordinate, ModuleName, Version};

/// One selected dependency in a module's resolved graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub coordinate: Coordinate,
    /// Distinct versions requested anywhere in the graph, ascending.
    pub requested: Vec<Version>,
    pub selected: Version,
    pub forced: bool,
    /// Requested directly by the module rather than transitively.
    pub direct: bool,
}

/// Resolution outcome for one module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleResolution {
    pub module: ModuleName,
    pub dependencies: Vec<ResolvedDependency>,
}

impl ModuleResolution {
    pub fn selected(&self, coordinate: &Coordinate) -> Option<&Version> {
        self.dependencies.iter().find(|d| &d.coordinate == coordinate).map(|d| &d.selected)
    }
}

/// Resolution outcome for a project.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    pub modules: Vec<ModuleResolution>,
    /// Force rules superseded by a later rule for the same coordinate.
    pub warnings: Vec<String>,
}
