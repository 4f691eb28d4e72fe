//! Select statments into sqlite_master and the table_info pragma and corresponding return types
use rusqlite::{Error as SqlError, Row};

/// Converts from a [`rusqlite::Row`]
///
/// [`rusqlite::Row`]: https://docs.rs/rusqlite/0.38/rusqlite/struct.Row.html
pub trait TryFromRow: Sized {
	fn from_row(row: &Row<'_>) -> Result<Self, SqlError>;
}

// internal tables such as sqlite_sequence are never mapped
pub const GET_TABLES: &str = r"SELECT name
FROM sqlite_master
WHERE type = 'table' AND
	name NOT LIKE 'sqlite\_%' ESCAPE '\'";
#[derive(Debug)]
pub struct GetTables {
	pub name: String,
}
impl TryFromRow for GetTables {
	fn from_row(row: &Row<'_>) -> Result<Self, SqlError> {
		Ok(GetTables {
			name: row.get(0)?,
		})
	}
}

pub const GET_COLUMNS: &str = r#"SELECT cid,
	name,
	type,
	"notnull"
FROM pragma_table_info(?1)
ORDER BY cid ASC"#;
#[derive(Debug)]
pub struct GetColumns {
	pub cid: i64,
	pub name: String,
	/// Declared type, empty when the column was declared without one
	pub typ: String,
	pub not_null: bool,
}
impl TryFromRow for GetColumns {
	fn from_row(row: &Row<'_>) -> Result<Self, SqlError> {
		Ok(GetColumns {
			cid: row.get(0)?,
			name: row.get(1)?,
			typ: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
			not_null: row.get(3)?,
		})
	}
}
