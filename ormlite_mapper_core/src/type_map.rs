//! Mapping of declared SQLite column types onto Java and ORMLite types

use super::schema_tree::{
	OrmType,
	ValueType,
};
use thiserror::Error;

/// Appended to a declared column type to mark the table's primary key, e.g. `id integer PKEY`
pub const PRIMARY_KEY_MARKER: &str = " PKEY";

/// The Java type of the generated field and the ORMLite `DataType` it is stored as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
	pub value_type: ValueType,
	pub orm_type: OrmType,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no Java type for column type '{0}'")]
pub struct UnknownType(pub String);

/// Looks up a raw column type
///
/// The base type ignores case, SQLite reports the types it recognises in upper case (`TEXT`).
/// The ` PKEY` marker must be spelled exactly and is only allowed on `integer`
pub fn map_type(raw_type: &str) -> Result<TypeMapping, UnknownType> {
	let (base, primary_key) = match raw_type.strip_suffix(PRIMARY_KEY_MARKER) {
		Some(base) => (base, true),
		None => (raw_type, false),
	};
	let (value_type, orm_type) = match (base.to_ascii_lowercase().as_str(), primary_key) {
		("text", false) => (ValueType::String, OrmType::String),
		("integer", _) => (ValueType::Integer, OrmType::Integer),
		("real", false) => (ValueType::Double, OrmType::Double),
		_ => return Err(UnknownType(raw_type.to_owned())),
	};
	Ok(TypeMapping { value_type, orm_type })
}

pub fn is_primary_key(raw_type: &str) -> bool {
	raw_type.ends_with(PRIMARY_KEY_MARKER)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_types() {
		assert_eq!(map_type("text").unwrap().value_type, ValueType::String);
		assert_eq!(map_type("text").unwrap().orm_type, OrmType::String);
		assert_eq!(map_type("real").unwrap().orm_type, OrmType::Double);
		assert_eq!(map_type("integer"), map_type("integer PKEY"));
		assert_eq!(map_type("integer PKEY").unwrap().value_type, ValueType::Integer);
	}

	#[test]
	fn base_type_ignores_case() {
		assert_eq!(map_type("TEXT").unwrap().orm_type, OrmType::String);
		assert_eq!(map_type("INTEGER").unwrap().orm_type, OrmType::Integer);
		assert_eq!(map_type("REAL").unwrap().value_type, ValueType::Double);
		assert_eq!(map_type("Text"), map_type("text"));
		assert_eq!(map_type("INTEGER PKEY"), map_type("integer PKEY"));
	}

	#[test]
	fn unknown_types_are_errors() {
		assert_eq!(map_type("date"), Err(UnknownType("date".to_owned())));
		assert!(map_type("DATE").is_err());
		assert!(map_type("varchar").is_err());
		assert!(map_type("").is_err());
		// the marker itself is case sensitive and only goes on integers
		assert!(map_type("integer pkey").is_err());
		assert!(map_type("text PKEY").is_err());
	}

	#[test]
	fn primary_key_marker() {
		assert!(is_primary_key("integer PKEY"));
		assert!(!is_primary_key("integer"));
		assert!(!is_primary_key("PKEY"));
	}
}
