use ormlite_mapper::{
	connection::SchemaReader,
	run,
	DatabaseArg,
	MapperError,
	Opt,
	TableSelector,
};
use ormlite_mapper_core::ModelError;
use rusqlite::Connection;
use std::{
	fs,
	path::{Path, PathBuf},
};
use tempfile::TempDir;

const PETS: &str = "CREATE TABLE owners (id integer PKEY, full_name text NOT NULL, score real);
CREATE TABLE dogs (id integer PKEY, name text, owners_id integer);
CREATE TABLE toys (id integer PKEY, dogs_id integer, vendors_id integer);
CREATE TABLE counters (id integer PRIMARY KEY AUTOINCREMENT, label text);";

fn create_db(dir: &Path, schema: &str) -> PathBuf {
	let path = dir.join("pets.db");
	let conn = Connection::open(&path).unwrap();
	conn.execute_batch(schema).unwrap();
	path
}

fn opt(db: &Path, tables: TableSelector, src_dir: &Path) -> Opt {
	Opt {
		debug: false,
		stdout: false,
		database: DatabaseArg {
			path: db.to_owned(),
			tables,
		},
		src_dir: src_dir.to_owned(),
		package: "com.example.pets".to_owned(),
	}
}

#[test]
fn writes_one_class_per_table() {
	let dir = TempDir::new().unwrap();
	let db = create_db(dir.path(), PETS);
	let src = dir.path().join("src");

	let classes = run(&opt(&db, TableSelector::All, &src)).unwrap();
	assert_eq!(classes.len(), 4);

	let package = src.join("com").join("example").join("pets");
	let mut files: Vec<String> = fs::read_dir(&package)
		.unwrap()
		.map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
		.collect();
	files.sort();
	assert_eq!(files, vec!["Counter.java", "Dog.java", "Owner.java", "Toy.java"]);

	let owner = fs::read_to_string(package.join("Owner.java")).unwrap();
	assert!(owner.starts_with("package com.example.pets;\n"));
	assert!(owner.contains("@DatabaseTable(tableName = \"owners\")\npublic class Owner {"));
	assert!(owner.contains("import com.j256.ormlite.field.ForeignCollectionField;"));
	assert!(owner.contains("@DatabaseField(columnName = COLUMN_ID, dataType = DataType.INTEGER, id = true)"));
	assert!(owner.contains("@DatabaseField(columnName = COLUMN_FULL_NAME, dataType = DataType.STRING, canBeNull = false)"));
	assert!(owner.contains("    @ForeignCollectionField\n    private ForeignCollection<Dog> dogs;"));
	// relationship fields come after every column
	assert!(owner.find("private Double score;").unwrap() < owner.find("private ForeignCollection<Dog> dogs;").unwrap());

	let dog = fs::read_to_string(package.join("Dog.java")).unwrap();
	assert!(dog.contains("private ForeignCollection<Toy> toys;"));
	assert!(dog.contains("private Integer ownersId;"));

	// vendors is not a table so toys only references dogs
	let toy = fs::read_to_string(package.join("Toy.java")).unwrap();
	assert!(!toy.contains("ForeignCollection"));
	assert!(toy.contains("public Integer getVendorsId() {"));

	let counter = fs::read_to_string(package.join("Counter.java")).unwrap();
	assert!(counter.contains("@DatabaseField(columnName = COLUMN_ID, dataType = DataType.INTEGER)\n"));
}

#[test]
fn only_selected_tables_are_mapped() {
	let dir = TempDir::new().unwrap();
	let db = create_db(dir.path(), PETS);
	let src = dir.path().join("src");

	let selector = TableSelector::Only(vec!["owners".to_owned(), "toys".to_owned()]);
	let classes = run(&opt(&db, selector, &src)).unwrap();
	let names: Vec<&str> = classes.iter().map(|c| c.class_name.as_str()).collect();
	assert_eq!(names, vec!["Owner", "Toy"]);

	// dogs is not mapped so neither side of its relationships is generated
	let owner = &classes[0].source;
	assert!(!owner.contains("ForeignCollection"));
}

#[test]
fn reader_sees_declared_types() {
	let dir = TempDir::new().unwrap();
	let db = create_db(dir.path(), PETS);

	let reader = SchemaReader::open(&db).unwrap();
	let tables = reader.get_all(&TableSelector::All).unwrap();
	let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
	assert_eq!(names, vec!["owners", "dogs", "toys", "counters"]);

	let types: Vec<&str> = tables[0].columns.iter().map(|c| c.raw_type.as_str()).collect();
	// recognised types come back upper cased, anything else as declared
	assert_eq!(types, vec!["integer PKEY", "TEXT", "REAL"]);
	assert!(tables[0].columns[1].not_null);
}

#[test]
fn unsupported_column_type_stops_the_run() {
	let dir = TempDir::new().unwrap();
	let db = create_db(dir.path(), "CREATE TABLE owners (id integer PKEY, born date);");
	let src = dir.path().join("src");

	match run(&opt(&db, TableSelector::All, &src)) {
		Err(MapperError::Model(ModelError::UnknownColumnType { table, column, raw_type })) => {
			assert_eq!(table, "owners");
			assert_eq!(column, "born");
			assert_eq!(raw_type, "date");
		},
		other => panic!("expected an unknown column type, got {:?}", other.map(|c| c.len())),
	}
	assert!(!src.exists());
}

#[test]
fn stdout_writes_no_files() {
	let dir = TempDir::new().unwrap();
	let db = create_db(dir.path(), PETS);
	let src = dir.path().join("src");

	let mut opt = opt(&db, TableSelector::All, &src);
	opt.stdout = true;
	let classes = run(&opt).unwrap();
	assert_eq!(classes.len(), 4);
	let owner = classes.iter().find(|c| c.class_name == "Owner").unwrap();
	assert!(owner.source.contains("@DatabaseField(columnName = COLUMN_FULL_NAME, dataType = DataType.STRING, canBeNull = false)"));
	assert!(owner.source.contains("@DatabaseField(columnName = COLUMN_SCORE, dataType = DataType.DOUBLE)"));
	assert!(!src.exists());
}

#[test]
fn tables_sharing_a_class_name() {
	let dir = TempDir::new().unwrap();
	let db = create_db(dir.path(), "CREATE TABLE owner (id integer PKEY);\nCREATE TABLE owners (id integer PKEY);");
	let src = dir.path().join("src");

	match run(&opt(&db, TableSelector::All, &src)) {
		Err(MapperError::Model(ModelError::DuplicateClassName { class_name, .. })) => assert_eq!(class_name, "Owner"),
		other => panic!("expected a duplicate class name, got {:?}", other.map(|c| c.len())),
	}
	assert!(!src.exists());
}

#[test]
fn missing_database() {
	let dir = TempDir::new().unwrap();
	let db = dir.path().join("nope.db");
	let src = dir.path().join("src");

	assert!(matches!(run(&opt(&db, TableSelector::All, &src)), Err(MapperError::MissingDatabase(_))));
	// the reader must not have created it
	assert!(!db.exists());
}
