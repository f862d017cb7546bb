pub mod cleanup;
pub mod dependency_resolver;
pub mod filesystem_package_source;
pub mod output_relocator;
pub mod scaffold_assets;
pub mod task_registry;
pub mod version_pinner;

pub use cleanup::{CLEAN_TASK, CleanTask};
pub use dependency_resolver::DependencyResolver;
pub use filesystem_package_source::FilesystemPackageSource;
pub use output_relocator::OutputPathRelocator;
pub use task_registry::TaskRegistry;
pub use version_pinner::VersionPinner;
