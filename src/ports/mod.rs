mod package_source;
mod task;

pub use package_source::{PackageManifest, PackageSource};
pub use task::{Task, TaskOutcome};
