//! Renders the schema model as ORMLite annotated Java classes
use ormlite_mapper_core::{
	Field,
	FieldKind,
	SchemaModel,
	TableModel,
};

const INDENT: &str = "    ";

const IMPORTS: [&str; 3] = [
	"com.j256.ormlite.field.DataType",
	"com.j256.ormlite.field.DatabaseField",
	"com.j256.ormlite.table.DatabaseTable",
];
/// Only needed by classes with a foreign collection field
const FOREIGN_IMPORTS: [&str; 2] = [
	"com.j256.ormlite.dao.ForeignCollection",
	"com.j256.ormlite.field.ForeignCollectionField",
];

pub trait ConvertToJava {
	fn as_java_string(&self) -> String;
}

/// A generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaClass {
	pub class_name: String,
	pub source: String,
}

impl JavaClass {
	pub fn file_name(&self) -> String {
		format!("{}.java", self.class_name)
	}
}

/// One class per table, in table name order
pub fn schema_to_java(model: &SchemaModel, package: &str) -> Vec<JavaClass> {
	model.iter().map(|table| table_to_java(table, package)).collect()
}

/// The full source file of a table's class
///
/// ```ignore
/// package com.example;
///
/// import com.j256.ormlite.field.DataType;
/// import com.j256.ormlite.field.DatabaseField;
/// import com.j256.ormlite.table.DatabaseTable;
/// // only when the table is referenced by another one
/// import com.j256.ormlite.dao.ForeignCollection;
/// import com.j256.ormlite.field.ForeignCollectionField;
///
/// @DatabaseTable(tableName = "owner")
/// public class Owner {
///
///     public static final String COLUMN_ID = "id";
///
///     @DatabaseField(columnName = COLUMN_ID, dataType = DataType.INTEGER, id = true)
///     private Integer id;
///
///     @ForeignCollectionField
///     private ForeignCollection<Dog> dog;
///
///     public Owner() {
///     }
///
///     public Integer getId() {
///         return id;
///     }
///
///     public ForeignCollection<Dog> getDog() {
///         return dog;
///     }
/// }
/// ```
pub fn table_to_java(table: &TableModel, package: &str) -> JavaClass {
	let fields = table.fields();
	let mut ret = String::new();

	if !package.is_empty() {
		ret += &format!("package {};\n\n", package);
	}
	ret += &imports(table);
	ret += &format!("\n@DatabaseTable(tableName = {})\n", java_string(&table.table_name));
	ret += &format!("public class {} {{\n\n", table.class_name);

	let constants: String = fields.iter()
		.copied()
		.filter_map(column_constant)
		.collect();
	if !constants.is_empty() {
		ret += &constants;
		ret += "\n";
	}

	for field in &fields {
		ret += &field.as_java_string();
		ret += "\n";
	}

	ret += &format!("{0}public {1}() {{\n{0}}}\n", INDENT, table.class_name);

	for field in &fields {
		ret += "\n";
		ret += &getter(field);
	}
	ret += "}\n";

	JavaClass {
		class_name: table.class_name.clone(),
		source: ret,
	}
}

fn imports(table: &TableModel) -> String {
	let foreign: &[&str] = if table.has_foreign_imports { &FOREIGN_IMPORTS } else { &[] };
	IMPORTS.iter()
		.chain(foreign.iter())
		.map(|i| format!("import {};\n", i))
		.collect()
}

/// `public static final String COLUMN_NAME = "name";`, relationship fields have no column to name
fn column_constant(field: &Field) -> Option<String> {
	field.column_constant_name().map(|constant| {
		format!("{}public static final String {} = {};\n", INDENT, constant, java_string(&field.name))
	})
}

fn getter(field: &Field) -> String {
	format!(
		"{0}public {1} {2}() {{\n{0}{0}return {3};\n{0}}}\n",
		INDENT,
		field.value_type,
		field.accessor_name,
		field.member_name,
	)
}

impl ConvertToJava for Field {
	/// The annotated field declaration
	fn as_java_string(&self) -> String {
		let annotation = match &self.kind {
			FieldKind::Column { column_constant_name, orm_type, is_primary_key, .. } => {
				let mut args = format!("columnName = {}, dataType = DataType.{}", column_constant_name, orm_type);
				if *is_primary_key {
					args += ", id = true";
				}
				if self.not_null {
					args += ", canBeNull = false";
				}
				format!("@DatabaseField({})", args)
			},
			FieldKind::ForeignCollection { .. } => "@ForeignCollectionField".to_owned(),
		};
		format!("{0}{1}\n{0}private {2} {3};\n", INDENT, annotation, self.value_type, self.member_name)
	}
}

/// Quotes `value` as a Java string literal
fn java_string(value: &str) -> String {
	let mut ret = String::with_capacity(value.len() + 2);
	ret.push('"');
	for c in value.chars() {
		match c {
			'"' => ret += "\\\"",
			'\\' => ret += "\\\\",
			_ => ret.push(c),
		}
	}
	ret.push('"');
	ret
}
