//! Converting schema identifiers into Java class, member and getter names

/// Words a generated Java member cannot be named
const JAVA_KEYWORDS: &[&str] = &[
	"abstract",
	"assert",
	"boolean",
	"break",
	"byte",
	"case",
	"catch",
	"char",
	"class",
	"const",
	"continue",
	"default",
	"do",
	"double",
	"else",
	"enum",
	"extends",
	"final",
	"finally",
	"float",
	"for",
	"goto",
	"if",
	"implements",
	"import",
	"instanceof",
	"int",
	"interface",
	"long",
	"native",
	"new",
	"package",
	"private",
	"protected",
	"public",
	"return",
	"short",
	"static",
	"strictfp",
	"super",
	"switch",
	"synchronized",
	"this",
	"throw",
	"throws",
	"transient",
	"try",
	"void",
	"volatile",
	"while",
	"true",
	"false",
	"null",
];

/// Final methods of `java.lang.Object` a generated getter would clash with
const OBJECT_GETTERS: &[&str] = &["getClass"];

/// Suffix rules for [`singularize`], tried in order. Longer suffixes come first so `knives` is not read as `knive` + `s`
///
/// Each entry is the suffix to look for, how many bytes to cut off and what to put in their place
///
/// [`singularize`]: ./fn.singularize.html
const SINGULAR_RULES: [(&str, usize, &str); 7] = [
	("ies", 3, "y"),
	("ives", 4, "ife"),
	("ves", 3, "f"),
	("tes", 1, ""),
	("ces", 1, ""),
	("es", 2, ""),
	("s", 1, ""),
];

/// Joins the `_` separated segments of `identifier` into one camel case word
///
/// Empty segments are dropped. Every segment after the first is capitalized (first letter upper case, rest lower case),
/// the first one only when `capitalize_first` is set, otherwise it is kept as written
///
/// ```
/// use ormlite_mapper_core::names::to_camel_case;
///
/// assert_eq!(to_camel_case("user_first_name", true), "UserFirstName");
/// assert_eq!(to_camel_case("user_first_name", false), "userFirstName");
/// ```
pub fn to_camel_case(identifier: &str, capitalize_first: bool) -> String {
	let mut ret = String::with_capacity(identifier.len());
	for (i, word) in identifier.split('_').filter(|w| !w.is_empty()).enumerate() {
		if i == 0 && !capitalize_first {
			ret += word;
		} else {
			ret += &capitalize(word);
		}
	}
	ret
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => {
			let mut ret = String::with_capacity(word.len());
			ret.push(first.to_ascii_uppercase());
			ret.extend(chars.map(|c| c.to_ascii_lowercase()));
			ret
		},
		None => String::new(),
	}
}

/// Turns a plural English noun into its singular with a handful of suffix rules
///
/// Words no rule matches are returned unchanged (after trimming whitespace)
///
/// ```
/// use ormlite_mapper_core::names::singularize;
///
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("data"), "data");
/// ```
pub fn singularize(word: &str) -> String {
	let word = word.trim();
	for &(suffix, cut, replacement) in SINGULAR_RULES.iter() {
		if word.ends_with(suffix) {
			return format!("{}{}", &word[..word.len() - cut], replacement);
		}
	}
	word.to_owned()
}

/// Java class name for a table, `dog_owners` becomes `DogOwner`
pub fn class_name(table: &str) -> String {
	singularize(&to_camel_case(table, true))
}

/// Java field name for a column or table. Reserved words get a trailing underscore
pub fn member_name(identifier: &str) -> String {
	let mut ret = to_camel_case(identifier, false);
	if JAVA_KEYWORDS.contains(&ret.as_str()) {
		ret.push('_');
	}
	ret
}

/// Name of the getter for a column or table. Getters that would override a final `Object` method get a trailing underscore
pub fn accessor_name(identifier: &str) -> String {
	let mut ret = format!("get{}", to_camel_case(identifier, true));
	if OBJECT_GETTERS.contains(&ret.as_str()) {
		ret.push('_');
	}
	ret
}

/// Name of the `public static final String` holding a column's name
pub fn column_constant_name(column: &str) -> String {
	format!("COLUMN_{}", column.to_uppercase())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn camel_case() {
		assert_eq!(to_camel_case("user_first_name", true), "UserFirstName");
		assert_eq!(to_camel_case("user_first_name", false), "userFirstName");
		assert_eq!(to_camel_case("", true), "");
		assert_eq!(to_camel_case("", false), "");
	}

	#[test]
	fn camel_case_skips_empty_segments() {
		assert_eq!(to_camel_case("__user__id_", false), "userId");
		assert_eq!(to_camel_case("_", true), "");
	}

	#[test]
	fn camel_case_lowers_tail_of_capitalized_segments() {
		assert_eq!(to_camel_case("html_ID", true), "HtmlId");
		// the first segment is left alone when not capitalized
		assert_eq!(to_camel_case("xmlFile_NAME", false), "xmlFileName");
	}

	#[test]
	fn singular_rules() {
		assert_eq!(singularize("boxes"), "box");
		assert_eq!(singularize("categories"), "category");
		assert_eq!(singularize("knives"), "knife");
		assert_eq!(singularize("wolves"), "wolf");
		assert_eq!(singularize("dogs"), "dog");
		assert_eq!(singularize("notes"), "note");
		assert_eq!(singularize("devices"), "device");
		assert_eq!(singularize("data"), "data");
		assert_eq!(singularize(" owners "), "owner");
		assert_eq!(singularize(""), "");
	}

	#[test]
	fn derived_names() {
		assert_eq!(class_name("dog_owners"), "DogOwner");
		assert_eq!(class_name("categories"), "Category");
		assert_eq!(member_name("owners_id"), "ownersId");
		assert_eq!(member_name("class"), "class_");
		assert_eq!(accessor_name("owners_id"), "getOwnersId");
		assert_eq!(accessor_name("class"), "getClass_");
		assert_eq!(accessor_name("class_name"), "getClassName");
		assert_eq!(column_constant_name("owners_id"), "COLUMN_OWNERS_ID");
	}
}
