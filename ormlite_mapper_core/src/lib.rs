#![forbid(unsafe_code)]
//! Schema model for generated ORMLite classes
//!
//! Takes the raw column rows of every accepted table and builds a [`SchemaModel`]: one [`TableModel`] per table with its class name,
//! its fields in render order and any one-to-many relationships inferred from the `<table>s_id` column naming convention
//!
//! Nothing in here talks to a database or writes files, the front end crate feeds it [`RawTable`]s and renders the result
//!
//! [`SchemaModel`]: ./struct.SchemaModel.html
//! [`TableModel`]: ./struct.TableModel.html
//! [`RawTable`]: ./struct.RawTable.html

pub mod names;

pub mod type_map;

mod schema_tree;
pub use schema_tree::*;

mod builder;
pub use builder::{
	build_schema_model,
	build_table,
	infer_relationships,
	merge,
};

mod error;
pub use error::ModelError;
