mod load_project;

pub use load_project::{load_project, load_sources};
