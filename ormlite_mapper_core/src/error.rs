use thiserror::Error;

/// Reasons the schema model could not be built. All of them abort the run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
	#[error("column '{column}' of table '{table}' has unsupported type '{raw_type}'")]
	UnknownColumnType {
		table: String,
		column: String,
		raw_type: String,
	},
	/// Two tables would be generated into the same class file
	#[error("tables '{first_table}' and '{second_table}' would both become class '{class_name}'")]
	DuplicateClassName {
		class_name: String,
		first_table: String,
		second_table: String,
	},
	/// A relationship field would replace a real column of the same name
	#[error("table '{table}' already has a column '{field}', cannot add the collection of '{source_table}' rows")]
	SyntheticFieldCollision {
		table: String,
		field: String,
		source_table: String,
	},
	/// Two columns of one table reference the same table, both would become the same collection field
	#[error("table '{source_table}' references '{table}' through both '{first_column}' and '{second_column}'")]
	DuplicateRelationship {
		table: String,
		source_table: String,
		first_column: String,
		second_column: String,
	},
}
