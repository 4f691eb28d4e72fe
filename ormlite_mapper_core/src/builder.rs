//! Builds the [`SchemaModel`] in two phases
//!
//! 1. [`build_table`] turns each [`RawTable`] into a [`TableModel`] of its own columns
//! 2. [`infer_relationships`] looks across all those models for `<table>s_id` columns
//!
//! [`merge`] then adds one foreign collection field per relationship to the referenced table
//!
//! [`SchemaModel`]: ../struct.SchemaModel.html
//! [`RawTable`]: ../struct.RawTable.html
//! [`TableModel`]: ../struct.TableModel.html
//! [`build_table`]: ./fn.build_table.html
//! [`infer_relationships`]: ./fn.infer_relationships.html
//! [`merge`]: ./fn.merge.html

use super::{
	error::ModelError,
	names,
	schema_tree::*,
	type_map,
};
use log::{debug, warn};
use std::collections::{
	BTreeMap,
	HashMap,
	HashSet,
};

/// Columns named `<plural table name>_id` reference that table
const REFERENCE_SUFFIX: &str = "s_id";
/// The `_id` cut off a reference column to get the referenced table's name
const ID_SUFFIX_LEN: usize = 3;

/// Builds every table, infers the relationships between them and merges the two
///
/// Fails on the first column with a type [`map_type`] does not know
///
/// [`map_type`]: ../type_map/fn.map_type.html
pub fn build_schema_model(raw_tables: &[RawTable]) -> Result<SchemaModel, ModelError> {
	let tables = raw_tables
		.iter()
		.map(build_table)
		.collect::<Result<Vec<_>, _>>()?;
	let relationships = infer_relationships(&tables);
	merge(tables, relationships)
}

/// Phase one, the model of a single table with one field per column
pub fn build_table(raw: &RawTable) -> Result<TableModel, ModelError> {
	let mut raw_columns: Vec<&RawColumn> = raw.columns.iter().collect();
	raw_columns.sort_by_key(|c| c.position);

	let mut columns = BTreeMap::new();
	for raw_column in raw_columns {
		let field = column_field(&raw.name, raw_column)?;
		columns.insert(field.name.clone(), field);
	}
	debug!("table {} has {} columns", raw.name, columns.len());

	Ok(TableModel {
		table_name: raw.name.clone(),
		class_name: names::class_name(&raw.name),
		columns,
		has_foreign_imports: false,
	})
}

fn column_field(table: &str, column: &RawColumn) -> Result<Field, ModelError> {
	let mapping = type_map::map_type(&column.raw_type).map_err(|e| ModelError::UnknownColumnType {
		table: table.to_owned(),
		column: column.name.clone(),
		raw_type: e.0,
	})?;

	Ok(Field {
		name: column.name.clone(),
		member_name: names::member_name(&column.name),
		accessor_name: names::accessor_name(&column.name),
		value_type: mapping.value_type,
		not_null: column.not_null,
		order: FieldOrder::Natural(column.position),
		kind: FieldKind::Column {
			column_constant_name: names::column_constant_name(&column.name),
			orm_type: mapping.orm_type,
			is_primary_key: type_map::is_primary_key(&column.raw_type),
		},
	})
}

/// Tables a column may refer to by naming convention, most likely first
///
/// `owners_id` refers to a table called `owners`, or failing that `owner`
fn referenced_tables(column: &str) -> Option<[&str; 2]> {
	if column.len() > REFERENCE_SUFFIX.len() && column.ends_with(REFERENCE_SUFFIX) {
		Some([
			&column[..column.len() - ID_SUFFIX_LEN],
			&column[..column.len() - REFERENCE_SUFFIX.len()],
		])
	} else {
		None
	}
}

/// Phase two, finds every column that references another accepted table
///
/// A column `<name>s_id` references the table `<name>s` if there is one, otherwise `<name>`.
/// Tables are visited in the order given and columns in table order, so the result is the same for the same input.
/// Columns following the naming convention whose table is not among `tables` are skipped
pub fn infer_relationships(tables: &[TableModel]) -> Vec<Relationship> {
	let accepted: HashSet<&str> = tables.iter().map(|t| t.table_name.as_str()).collect();

	let mut ret = Vec::new();
	for table in tables {
		for field in table.natural_fields() {
			let candidates = match referenced_tables(&field.name) {
				Some(candidates) => candidates,
				None => continue,
			};
			match candidates.iter().find(|c| accepted.contains(*c)) {
				Some(target) => ret.push(Relationship {
					source_table: table.table_name.clone(),
					target_table: (*target).to_owned(),
					column: field.name.clone(),
				}),
				None => debug!("{}.{} looks like a reference to {} which is not being mapped", table.table_name, field.name, candidates[0]),
			}
		}
	}
	ret
}

/// Adds a foreign collection field to the target of every relationship
///
/// The field is keyed by the source table's name and is rendered after all of the target's own columns.
/// A target that already has a field with that name is an error rather than being overwritten,
/// as are two tables that would share a class name
pub fn merge(tables: Vec<TableModel>, relationships: Vec<Relationship>) -> Result<SchemaModel, ModelError> {
	let mut class_tables: HashMap<&str, &str> = HashMap::new();
	for table in &tables {
		if let Some(first) = class_tables.insert(&table.class_name, &table.table_name) {
			return Err(ModelError::DuplicateClassName {
				class_name: table.class_name.clone(),
				first_table: first.to_owned(),
				second_table: table.table_name.clone(),
			});
		}
	}
	let class_names: HashMap<String, String> = tables
		.iter()
		.map(|t| (t.table_name.clone(), t.class_name.clone()))
		.collect();
	let mut tables: BTreeMap<String, TableModel> = tables
		.into_iter()
		.map(|t| (t.table_name.clone(), t))
		.collect();

	for (i, rel) in relationships.iter().enumerate() {
		let target = match tables.get_mut(&rel.target_table) {
			Some(target) => target,
			None => {
				debug!("skipping relationship {} -> {}, no such table", rel.source_table, rel.target_table);
				continue;
			},
		};
		if let Some(existing) = target.columns.get(&rel.source_table) {
			return Err(match &existing.kind {
				FieldKind::Column { .. } => ModelError::SyntheticFieldCollision {
					table: rel.target_table.clone(),
					field: rel.source_table.clone(),
					source_table: rel.source_table.clone(),
				},
				FieldKind::ForeignCollection { source_column, .. } => ModelError::DuplicateRelationship {
					table: rel.target_table.clone(),
					source_table: rel.source_table.clone(),
					first_column: source_column.clone(),
					second_column: rel.column.clone(),
				},
			});
		}
		if target.primary_key().is_none() {
			warn!("{} has no PKEY column, ORMLite needs one to fill its {} collection", rel.target_table, rel.source_table);
		}
		let source_class = class_names
			.get(&rel.source_table)
			.cloned()
			.unwrap_or_else(|| names::class_name(&rel.source_table));

		debug!("{} has many {} through {}.{}", rel.target_table, rel.source_table, rel.source_table, rel.column);
		target.columns.insert(rel.source_table.clone(), Field {
			name: rel.source_table.clone(),
			member_name: names::member_name(&rel.source_table),
			accessor_name: names::accessor_name(&rel.source_table),
			value_type: ValueType::ForeignCollection(source_class),
			not_null: false,
			order: FieldOrder::Synthetic(i),
			kind: FieldKind::ForeignCollection {
				source_table: rel.source_table.clone(),
				source_column: rel.column.clone(),
			},
		});
		target.has_foreign_imports = true;
	}

	Ok(SchemaModel { tables, relationships })
}
