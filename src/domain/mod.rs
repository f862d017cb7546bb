pub mod error;
pub mod identities;
pub mod layout;
pub mod module_node;
pub mod output_root;
pub mod override_rule;
pub mod project;
pub mod resolution;
pub mod version;

pub use error::AppError;
pub use identities::{Coordinate, DependencyRequest, ModuleName};
pub use layout::ProjectLayout;
pub use module_node::ModuleNode;
pub use output_root::{BuildOutputRoot, normalize_path};
pub use override_rule::{OverrideTable, VersionOverrideRule};
pub use project::{ModuleConfig, OutputConfig, ProjectConfig, RepositoryConfig};
pub use resolution::{ModuleResolution, ResolutionReport, ResolvedDependency};
pub use version::Version;
