use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

const TABLE: &str = "\
they\tthem\ttheir\ttheirs\tthemselves
she\ther\ther\thers\therself
fae\tfaer\tfaer\tfaers\tfaerself
";

#[test]
fn test_load_defaults_matches_table() {
	let registry = load_defaults();
	assert_eq!(registry.len(), DEFAULT_SETS.len());
	for (label, set) in DEFAULT_SETS {
		assert_eq!(registry.get(label).map(PronounSet::as_str), Some(set));
	}
}

#[test]
fn test_parse_table_derives_labels() {
	let registry = parse_table(TABLE).unwrap();
	assert_eq!(
		registry
			.iter()
			.map(|(label, set)| (label, set.as_str()))
			.collect::<Vec<_>>(),
		vec![
			("they/.../themselves", "they/them/their/theirs/themselves"),
			("she/.../herself", "she/her/her/hers/herself"),
			("fae/.../faerself", "fae/faer/faer/faers/faerself"),
		]
	);
}

#[test]
fn test_parse_table_accepts_crlf_and_blank_lines() {
	let registry = parse_table("\r\nshe\ther\ther\thers\therself\r\n\r\n").unwrap();
	assert_eq!(registry.len(), 1);
	assert_eq!(
		registry.get("she/.../herself").map(PronounSet::as_str),
		Some("she/her/her/hers/herself")
	);
}

#[test]
fn test_parse_table_does_not_assume_width() {
	let registry = parse_table("e\tem\teir\teirs\teirself\teirselves\nit\n").unwrap();
	assert_eq!(
		registry.get("e/.../eirselves").map(PronounSet::as_str),
		Some("e/em/eir/eirs/eirself/eirselves")
	);
	assert_eq!(registry.get("it/.../it").map(PronounSet::as_str), Some("it"));
}

#[test]
fn test_parse_table_duplicate_label_takes_later_row() {
	let registry = parse_table("they\tthem\ta\tb\tthemselves\nthey\tthem\ttheir\ttheirs\tthemselves\n").unwrap();
	assert_eq!(registry.len(), 1);
	assert_eq!(
		registry.get("they/.../themselves").map(PronounSet::as_str),
		Some("they/them/their/theirs/themselves")
	);
}

#[rstest]
#[case("", LoadError::Empty)]
#[case("\n\n  \n", LoadError::Empty)]
#[case("she\ther\ther\thers\therself\nhe\t\this\this\thimself\n", LoadError::EmptyColumn { line: 2, column: 2 })]
#[case("she\ther\ther\thers\therself\t\n", LoadError::EmptyColumn { line: 1, column: 6 })]
#[case(
	"she/her\ther\ther\thers\therself\n",
	LoadError::SlashInColumn { line: 1, column: 1, text: "she/her".into() }
)]
fn test_parse_table_rejects_malformed(#[case] text: &str, #[case] expected: LoadError) {
	assert_eq!(parse_table(text), Err(expected));
}

#[test]
fn test_refresh_maps_transport_failure() {
	let err = refresh::<&str, _>(Err("404 Not Found")).unwrap_err();
	assert_eq!(err, LoadError::Fetch("404 Not Found".into()));
	assert_eq!(err.to_string(), "failed to fetch pronoun table: 404 Not Found");
}

#[test]
fn test_refresh_parses_fetched_text() {
	let registry = refresh::<_, String>(Ok(TABLE.to_owned())).unwrap();
	assert_eq!(registry.len(), 3);
}
