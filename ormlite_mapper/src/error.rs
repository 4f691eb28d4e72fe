use ormlite_mapper_core::ModelError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
	#[error("SQLite error: {0}")]
	Sqlite(#[from] rusqlite::Error),
	#[error(transparent)]
	Model(#[from] ModelError),
	#[error("database {} does not exist", .0.display())]
	MissingDatabase(PathBuf),
	#[error("could not write {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("invalid database argument '{0}', expected <db name>[:table name[,table name...]]")]
	InvalidSelector(String),
}
