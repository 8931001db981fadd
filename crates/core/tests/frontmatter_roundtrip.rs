use postdesk_core::frontmatter::{FieldValue, Frontmatter, parse, serialize};
use rstest::rstest;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[rstest]
#[case::single_string(vec![("title", FieldValue::from("Hello"))], "Body")]
#[case::all_kinds(
    vec![
        ("title", FieldValue::from("A post: with colon")),
        ("tags", FieldValue::List(strings(&["x", "y z"]))),
        ("draft", FieldValue::Bool(false)),
        ("author", FieldValue::from("")),
    ],
    "# Heading\n\nparagraph with **bold**"
)]
#[case::no_fields(vec![], "only body")]
#[case::empty_body(vec![("draft", FieldValue::Bool(true))], "")]
fn parse_inverts_serialize(#[case] fields: Vec<(&str, FieldValue)>, #[case] body: &str) {
    let fm: Frontmatter = fields.into_iter().collect();
    let doc = parse(&serialize(&fm, body));
    assert_eq!(doc.frontmatter, fm);
    assert_eq!(doc.body, body);
}

#[test]
fn empty_lists_are_lost_on_roundtrip() {
    let mut fm = Frontmatter::new();
    fm.insert("title", "T");
    fm.insert("categories", Vec::<String>::new());

    let text = serialize(&fm, "b");
    assert!(!text.contains("categories"));
    assert!(!text.contains("[]"));

    let doc = parse(&text);
    assert!(!doc.frontmatter.contains_key("categories"));
    assert_eq!(doc.frontmatter.len(), 1);
}

#[test]
fn input_without_marker_is_all_body() {
    let content = "Just text\n\n---\n\nwith a rule";
    let doc = parse(content);
    assert!(doc.frontmatter.is_empty());
    assert_eq!(doc.body, content);
}

#[test]
fn fixture_post_parses_in_order() {
    let doc = parse(include_str!("fixtures/sample_post.md"));
    let keys: Vec<_> = doc.frontmatter.keys().collect();
    assert_eq!(keys, vec!["title", "date", "draft", "author", "tags", "weight"]);
    assert_eq!(
        doc.frontmatter.get("tags"),
        Some(&FieldValue::List(strings(&["rust", "hugo"])))
    );
    assert_eq!(doc.frontmatter.get("weight"), Some(&FieldValue::from("10")));
    assert!(doc.body.starts_with("# Writing a Blog Engine"));
    assert!(doc.body.ends_with("Done."));
}
