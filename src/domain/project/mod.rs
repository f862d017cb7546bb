pub mod config;
pub mod parse;
pub mod paths;

pub use config::{ModuleConfig, OutputConfig, ProjectConfig, ProjectSection, RepositoryConfig};
pub use parse::parse_project_content;
