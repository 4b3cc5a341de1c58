use super::*;
use pretty_assertions::assert_eq;

#[test]
fn root_marker_is_stripped() {
    let path = ResolvedPath::parse("root.user.name");
    assert_eq!(path.as_str(), "user.name");
    assert_eq!(path.steps(), &[Step::Field("user"), Step::Field("name")]);
}

#[test]
fn path_without_root_marker_is_kept() {
    let path = ResolvedPath::parse("user.name");
    assert_eq!(path.as_str(), "user.name");
    assert_eq!(path.len(), 2);
}

#[test]
fn only_exact_root_segment_is_stripped() {
    assert_eq!(ResolvedPath::parse("rooted.x").as_str(), "rooted.x");
    assert_eq!(ResolvedPath::parse("root").as_str(), "root");
    assert_eq!(ResolvedPath::parse("a.root.b").as_str(), "a.root.b");
}

#[test]
fn numeric_segments_are_indices() {
    let path = ResolvedPath::parse("root.items.0.id");
    assert_eq!(
        path.steps(),
        &[Step::Field("items"), Step::Index("0"), Step::Field("id")]
    );
}

#[test]
fn mixed_segments_are_fields() {
    assert_eq!(Step::classify("0a"), Step::Field("0a"));
    assert_eq!(Step::classify("-1"), Step::Field("-1"));
    assert_eq!(Step::classify("42"), Step::Index("42"));
    assert_eq!(Step::classify("007"), Step::Index("007"));
}

#[test]
fn empty_segments_propagate() {
    let path = ResolvedPath::parse("a..b");
    assert_eq!(
        path.steps(),
        &[Step::Field("a"), Step::Field(""), Step::Field("b")]
    );
    assert_eq!(Step::classify(""), Step::Field(""));
}

#[test]
fn ancestors_root_to_leaf() {
    let path = ResolvedPath::parse("root.a.b.c.d");
    let ancestors: Vec<&str> = path.ancestors().map(|p| p.as_str()).collect();
    assert_eq!(ancestors, vec!["a", "a.b", "a.b.c"]);
}

#[test]
fn single_segment_has_no_ancestors() {
    let path = ResolvedPath::parse("root.firstItemId");
    assert_eq!(path.ancestors().count(), 0);
    assert_eq!(path.ancestors().len(), 0);
}

#[test]
fn prefix_keeps_step_tags() {
    let path = ResolvedPath::parse("list.3.name");
    let prefix = path.prefix(2);
    assert_eq!(prefix.as_str(), "list.3");
    assert_eq!(prefix.steps(), &[Step::Field("list"), Step::Index("3")]);
}

#[test]
fn prefix_is_clamped() {
    let path = ResolvedPath::parse("a.b");
    assert_eq!(path.prefix(0).as_str(), "a");
    assert_eq!(path.prefix(9).as_str(), "a.b");
}

#[test]
fn prefix_with_empty_segments() {
    let path = ResolvedPath::parse("a..b");
    assert_eq!(path.prefix(2).as_str(), "a.");
    assert_eq!(path.prefix(3).as_str(), "a..b");
}

#[test]
fn segments_iterate_raw_text() {
    let path = ResolvedPath::parse("root.x.1");
    assert_eq!(path.segments().collect::<Vec<_>>(), vec!["x", "1"]);
    assert_eq!(path.to_string(), "x.1");
}

#[test]
fn empty_text_still_has_one_step() {
    let path = ResolvedPath::parse("");
    assert_eq!(path.len(), 1);
    assert!(!path.is_empty());
    assert!(!ResolvedPath::parse("root.").is_empty());
}
