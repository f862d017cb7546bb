//! buildpin: relocate multi-module build outputs under one shared root and
//! force dependency versions uniformly across every module.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InitOutcome, ResolveOptions, TaskOutcome, TaskSummary, clean, clean_at, init, init_at, layout,
    layout_at, list_tasks_at, resolve, resolve_at, run_task_at,
};
pub use domain::{
    AppError, BuildOutputRoot, Coordinate, ModuleName, ModuleNode, ModuleResolution,
    OverrideTable, ProjectLayout, ResolutionReport, ResolvedDependency, Version,
    VersionOverrideRule,
};
