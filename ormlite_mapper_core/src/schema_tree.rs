//! A simple model of the tables being mapped, from the raw rows read out of the database to the classes handed to the renderer

use std::{
	collections::BTreeMap,
	fmt::{self, Display, Formatter},
};

/// A table as read from the database, columns in the order they were declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
	pub name: String,
	pub columns: Vec<RawColumn>,
}

/// One row of `PRAGMA table_info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
	pub position: i64,
	pub name: String,
	pub raw_type: String,
	pub not_null: bool,
}

/// Where a field goes in the generated class
///
/// Every real column sorts before every relationship field, real columns by their position in the table
/// and relationship fields by the order they were found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldOrder {
	Natural(i64),
	Synthetic(usize),
}

/// Java type of a generated field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
	String,
	Integer,
	Double,
	/// `ForeignCollection<T>` of the class with the given name
	ForeignCollection(String),
}

impl Display for ValueType {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			ValueType::String => write!(f, "String"),
			ValueType::Integer => write!(f, "Integer"),
			ValueType::Double => write!(f, "Double"),
			ValueType::ForeignCollection(class) => write!(f, "ForeignCollection<{}>", class),
		}
	}
}

/// Variant of ORMLite's `DataType` enum a column is persisted as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrmType {
	String,
	Integer,
	Double,
}

impl OrmType {
	pub fn as_str(&self) -> &'static str {
		match self {
			OrmType::String => "STRING",
			OrmType::Integer => "INTEGER",
			OrmType::Double => "DOUBLE",
		}
	}
}

impl Display for OrmType {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
	/// Backed by a column of the table
	Column {
		column_constant_name: String,
		orm_type: OrmType,
		is_primary_key: bool,
	},
	/// All rows of `source_table` whose `<table>s_id` column points at this row
	ForeignCollection {
		source_table: String,
		source_column: String,
	},
}

/// A field of a generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	/// Column name, or the referencing table's name for a relationship field
	pub name: String,
	pub member_name: String,
	pub accessor_name: String,
	pub value_type: ValueType,
	pub not_null: bool,
	pub order: FieldOrder,
	pub kind: FieldKind,
}

impl Field {
	pub fn is_synthetic(&self) -> bool {
		matches!(self.kind, FieldKind::ForeignCollection { .. })
	}

	pub fn is_primary_key(&self) -> bool {
		matches!(self.kind, FieldKind::Column { is_primary_key: true, .. })
	}

	pub fn orm_type(&self) -> Option<OrmType> {
		match &self.kind {
			FieldKind::Column { orm_type, .. } => Some(*orm_type),
			FieldKind::ForeignCollection { .. } => None,
		}
	}

	pub fn column_constant_name(&self) -> Option<&str> {
		match &self.kind {
			FieldKind::Column { column_constant_name, .. } => Some(column_constant_name),
			FieldKind::ForeignCollection { .. } => None,
		}
	}
}

/// Everything needed to render the class for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
	pub table_name: String,
	pub class_name: String,
	/// Keyed by [`Field::name`](./struct.Field.html#structfield.name)
	pub columns: BTreeMap<String, Field>,
	/// Set once a relationship field is added, the class then needs the foreign collection imports
	pub has_foreign_imports: bool,
}

impl TableModel {
	/// All fields in the order they are rendered
	pub fn fields(&self) -> Vec<&Field> {
		let mut fields: Vec<&Field> = self.columns.values().collect();
		fields.sort_by_key(|f| f.order);
		fields
	}

	/// Fields backed by a real column, in table order
	pub fn natural_fields(&self) -> Vec<&Field> {
		self.fields().into_iter().filter(|f| !f.is_synthetic()).collect()
	}

	pub fn primary_key(&self) -> Option<&Field> {
		self.columns.values().find(|f| f.is_primary_key())
	}
}

/// An inferred one-to-many relationship: each row of `target_table` may be referenced by many rows of `source_table`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
	pub source_table: String,
	pub target_table: String,
	/// The `<target_table>_id` column of `source_table`
	pub column: String,
}

/// The finished model of every accepted table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
	pub tables: BTreeMap<String, TableModel>,
	pub relationships: Vec<Relationship>,
}

impl SchemaModel {
	pub fn get(&self, table: &str) -> Option<&TableModel> {
		self.tables.get(table)
	}

	pub fn iter(&self) -> impl Iterator<Item = &TableModel> {
		self.tables.values()
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}
