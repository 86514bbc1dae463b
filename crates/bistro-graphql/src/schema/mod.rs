//! GraphQL schema building.
//!
//! ## Components
//!
//! - [`DirectorySchemaBuilder`] - Assembles the Query and Mutation roots
//! - [`types`] - Object and input types for restaurants, dishes and delete results

mod builder;
pub mod types;

pub use builder::{DirectorySchemaBuilder, SchemaBuilderConfig};
pub use types::DeleteResponse;
