//! Reads the tables of a SQLite database and creates an ORMLite annotated Java class for each of them
//!
//! Columns named `<table>s_id` are taken to reference `<table>s` (or `<table>`), the referenced class gets a `ForeignCollection` of the referencing one

pub mod connection;

pub mod java_model;

pub mod sqlite_select_types;

mod error;
pub use error::MapperError;

use connection::SchemaReader;
use java_model::JavaClass;
use log::{info, warn};
use ormlite_mapper_core::build_schema_model;
use std::{
	fmt::{self, Display, Formatter},
	fs,
	io::{self, Write},
	path::{Path, PathBuf},
	str::FromStr,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "ormlite_mapper", about = "Generates ORMLite classes for the tables of a SQLite database")]
pub struct Opt {
	/// Log what is being done in more detail
	#[structopt(short, long)]
	pub debug: bool,

	/// Print the generated classes to stdout instead of writing them to files
	#[structopt(long)]
	pub stdout: bool,

	/// SQLite file, optionally followed by ':' and a comma separated list of the tables to map
	///
	/// e.g. `pets.db` or `pets.db:owner,dog`
	pub database: DatabaseArg,

	/// Root of the Java source tree, classes go into the package's directory below it
	#[structopt(parse(from_os_str))]
	pub src_dir: PathBuf,

	/// Package of the generated classes
	pub package: String,
}

impl Opt {
	pub fn get_reader(&self) -> Result<SchemaReader, MapperError> {
		SchemaReader::open(&self.database.path)
	}

	/// Default log filter, `RUST_LOG` takes precedence
	pub fn log_filter(&self) -> &'static str {
		if self.debug { "debug" } else { "info" }
	}

	/// Directory the classes of the package are written to
	pub fn package_dir(&self) -> PathBuf {
		package_dir(&self.src_dir, &self.package)
	}
}

/// Which tables of the database get a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSelector {
	All,
	/// Only tables with exactly these names
	Only(Vec<String>),
}

impl TableSelector {
	pub fn accepts(&self, table: &str) -> bool {
		match self {
			TableSelector::All => true,
			TableSelector::Only(names) => names.iter().any(|n| n == table),
		}
	}
}

impl Display for TableSelector {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			TableSelector::All => write!(f, "*"),
			TableSelector::Only(names) => write!(f, "{}", names.join(",")),
		}
	}
}

/// The `<db name>[:table name[,table name...]]` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseArg {
	pub path: PathBuf,
	pub tables: TableSelector,
}

impl FromStr for DatabaseArg {
	type Err = MapperError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (path, tables) = match s.split_once(':') {
			None => (s, TableSelector::All),
			Some((path, list)) => {
				let names: Vec<String> = list
					.split(',')
					.map(str::trim)
					.filter(|n| !n.is_empty())
					.map(str::to_owned)
					.collect();
				if names.is_empty() || list.contains(':') {
					return Err(MapperError::InvalidSelector(s.to_owned()));
				}
				(path, TableSelector::Only(names))
			},
		};
		if path.is_empty() {
			return Err(MapperError::InvalidSelector(s.to_owned()));
		}
		Ok(DatabaseArg {
			path: PathBuf::from(path),
			tables,
		})
	}
}

/// `com.example.model` under `src` is `src/com/example/model`
pub fn package_dir(src_dir: &Path, package: &str) -> PathBuf {
	package
		.split('.')
		.filter(|p| !p.is_empty())
		.fold(src_dir.to_owned(), |dir, part| dir.join(part))
}

/// Reads the schema, builds the model and writes out the classes
pub fn run(opt: &Opt) -> Result<Vec<JavaClass>, MapperError> {
	info!("Database name: {}", opt.database.path.display());
	info!("Tables: {}", opt.database.tables);
	info!("Src dir: {}", opt.src_dir.display());
	info!("Package name: {}", opt.package);

	let reader = opt.get_reader()?;
	let raw_tables = reader.get_all(&opt.database.tables)?;
	let accepted: Vec<&str> = raw_tables.iter().map(|t| t.name.as_str()).collect();
	info!("Accepted tables: {}", accepted.join(", "));

	let model = build_schema_model(&raw_tables)?;
	if model.is_empty() {
		warn!("No tables to map in {}", opt.database.path.display());
	}
	info!("Mapping {} tables, {} relationships", model.len(), model.relationships.len());
	let classes = java_model::schema_to_java(&model, &opt.package);
	make_output(&classes, opt)?;
	Ok(classes)
}

/// Writes every class to its file, or to stdout with `--stdout`
///
/// Files written before a failing one are left in place
pub fn make_output(classes: &[JavaClass], opt: &Opt) -> Result<(), MapperError> {
	if opt.stdout {
		let stdout = io::stdout();
		let mut out = stdout.lock();
		for class in classes {
			writeln!(out, "// {}\n{}", class.file_name(), class.source).map_err(|source| MapperError::Io {
				path: PathBuf::from("<stdout>"),
				source,
			})?;
		}
		return Ok(());
	}

	let dir = opt.package_dir();
	fs::create_dir_all(&dir).map_err(|source| MapperError::Io {
		path: dir.clone(),
		source,
	})?;
	for class in classes {
		let path = dir.join(class.file_name());
		info!("Creating {}", path.display());
		fs::write(&path, &class.source).map_err(|source| MapperError::Io { path, source })?;
	}
	Ok(())
}
