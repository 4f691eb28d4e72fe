use super::{
	error::MapperError,
	sqlite_select_types::*,
	TableSelector,
};
use log::{debug, warn};
use ormlite_mapper_core::{RawColumn, RawTable};
use rusqlite::{Connection, Error as SqlError, OpenFlags};
use std::path::Path;

/// Reads the tables and columns of a SQLite database
pub struct SchemaReader {
	conn: Connection,
}

impl SchemaReader {
	pub fn new(conn: Connection) -> SchemaReader {
		SchemaReader { conn }
	}

	/// Opens an existing database file read only. A missing file is an error rather than a new empty database
	pub fn open(path: &Path) -> Result<SchemaReader, MapperError> {
		if !path.is_file() {
			return Err(MapperError::MissingDatabase(path.to_owned()));
		}
		let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;
		Ok(SchemaReader::new(conn))
	}

	/// Names of the tables `selector` accepts, in the order SQLite lists them
	pub fn accepted_tables(&self, selector: &TableSelector) -> Result<Vec<String>, MapperError> {
		let names: Vec<String> = self
			.get_tables()?
			.into_iter()
			.map(|v| v.name)
			.filter(|name| selector.accepts(name))
			.collect();

		if let TableSelector::Only(wanted) = selector {
			for missing in wanted.iter().filter(|w| !names.contains(*w)) {
				warn!("table {} is not in the database", missing);
			}
		}
		Ok(names)
	}

	/// Column rows of one table in declaration order
	pub fn get_raw_table(&self, table: &str) -> Result<RawTable, MapperError> {
		let columns = self
			.get_columns(table)?
			.into_iter()
			.map(|v| RawColumn {
				position: v.cid,
				name: v.name,
				raw_type: v.typ,
				not_null: v.not_null,
			})
			.collect();
		Ok(RawTable {
			name: table.to_owned(),
			columns,
		})
	}

	/// Every accepted table with its columns
	pub fn get_all(&self, selector: &TableSelector) -> Result<Vec<RawTable>, MapperError> {
		let tables = self.accepted_tables(selector)?;
		tables.iter().map(|name| {
			debug!("reading columns of {}", name);
			self.get_raw_table(name)
		}).collect()
	}
}
/// Wrappers on SQL select statements
impl SchemaReader {
	fn get_tables(&self) -> Result<Vec<GetTables>, SqlError> {
		let mut stmt = self.conn.prepare_cached(GET_TABLES)?;
		let rows = stmt.query_map([], GetTables::from_row)?;
		rows.collect()
	}
	fn get_columns(&self, table: &str) -> Result<Vec<GetColumns>, SqlError> {
		let mut stmt = self.conn.prepare_cached(GET_COLUMNS)?;
		let rows = stmt.query_map([table], GetColumns::from_row)?;
		rows.collect()
	}
}
