mod in_memory_package_source;

pub use in_memory_package_source::InMemoryPackageSource;
