pub mod builtin;
pub mod csv_ops;
pub mod dataset_source;
pub mod fieldname;
pub mod load_error;
pub mod loader;

pub use dataset_source::DatasetSource;
pub use load_error::LoadError;
pub use loader::DatasetLoader;
