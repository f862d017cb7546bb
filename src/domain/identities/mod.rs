pub mod coordinate;
pub mod module_name;
pub mod validation;

pub use coordinate::{Coordinate, DependencyRequest};
pub use module_name::ModuleName;
