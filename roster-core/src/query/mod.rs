pub mod builder;
pub mod filtering;
pub mod sorting;
pub mod types;

pub use builder::ClientQueryBuilder;
pub use filtering::{apply_query, filter_clients};
pub use sorting::*;
pub use types::*;
