use super::*;
use crate::Language;
use pretty_assertions::assert_eq;

fn path(text: &str) -> ResolvedPath<'_> {
    ResolvedPath::parse(text)
}

#[test]
fn member_access_fields_and_indices() {
    assert_eq!(member_access("input", &path("root.items.0.id")), "input.items[0].id");
    assert_eq!(member_access("result", &path("root.a")), "result.a");
    assert_eq!(member_access("input", &path("0.1")), "input[0][1]");
}

#[test]
fn member_access_keeps_empty_segments() {
    assert_eq!(member_access("input", &path("a..b")), "input.a..b");
}

#[test]
fn key_list_quotes_every_segment() {
    assert_eq!(key_list(&path("root.items.0.id"), double_quoted), r#""items", "0", "id""#);
    assert_eq!(key_list(&path("root.a"), single_quoted), "'a'");
}

#[test]
fn quoting_escapes() {
    assert_eq!(double_quoted(r#"a"b\c"#), r#""a\"b\\c""#);
    assert_eq!(single_quoted("it's"), r"'it\'s'");
    assert_eq!(single_quoted(r#"say "hi""#), r#"'say "hi"'"#);
}

/// (language, declaration of `a.b`, assignment `user.items.0 -> a.b.c`)
const STATEMENTS: &[(Language, &str, &str)] = &[
    (
        Language::JavaScript,
        "result.a.b = {};",
        "result.a.b.c = input.user.items[0];",
    ),
    (
        Language::TypeScript,
        "result.a.b = {};",
        "result.a.b.c = input.user.items[0];",
    ),
    (
        Language::Groovy,
        "result.a.b = [:]",
        "result.a.b.c = input.user.items[0]",
    ),
    (
        Language::Java,
        r#"createNestedMap(result, new String[] { "a", "b" });"#,
        r#"setValue(result, new String[] { "a", "b", "c" }, getValue(input, new String[] { "user", "items", "0" }));"#,
    ),
    (
        Language::Python,
        "set_nested_value(result, 'a', 'b', value={})",
        "set_nested_value(result, 'a', 'b', 'c', value=get_nested_value(input_data, 'user', 'items', '0'))",
    ),
    (
        Language::CSharp,
        r#"SetValue(result, "a.b", new Dictionary<string, object>());"#,
        r#"SetValue(result, "a.b.c", GetValue(input, "user.items.0"));"#,
    ),
];

#[test]
fn statements_per_backend() {
    let source = path("root.user.items.0");
    let target = path("root.a.b.c");
    let container = target.prefix(2);

    for &(language, declaration, assignment) in STATEMENTS {
        let backend = language.backend();
        assert_eq!(backend.declare(&container), declaration, "{language} declare");
        assert_eq!(
            backend.write(&target, &backend.read(&source)),
            assignment,
            "{language} assign"
        );
    }
}

#[test]
fn boilerplate_ends_with_newline() {
    for language in Language::ALL {
        let backend = language.backend();
        assert!(backend.preamble().ends_with('\n'), "{language} preamble");
        assert!(backend.postamble().ends_with('\n'), "{language} postamble");
    }
}

#[test]
fn boilerplate_reads_input_json() {
    for language in Language::ALL {
        let preamble = language.backend().preamble();
        assert!(preamble.contains("input.json"), "{language}");
    }
}

#[test]
fn boilerplate_binds_conventional_variables() {
    for language in Language::ALL {
        let backend = language.backend();
        assert!(
            backend.preamble().contains(backend.input_var()),
            "{language} input var"
        );
        assert!(
            backend.postamble().contains(backend.result_var()),
            "{language} result var"
        );
    }
}

#[test]
fn helper_backends_ship_their_helpers() {
    let java = Language::Java.backend().postamble();
    assert!(java.contains("private static Object getValue("));
    assert!(java.contains("private static void setValue("));
    assert!(java.contains("createNestedMap("));

    let python = Language::Python.backend().preamble();
    assert!(python.contains("def get_nested_value("));
    assert!(python.contains("def set_nested_value("));

    let csharp = Language::CSharp.backend().postamble();
    assert!(csharp.contains("private static object GetValue("));
    assert!(csharp.contains("private static void SetValue("));
}

#[test]
fn body_indent_matches_enclosing_method() {
    assert_eq!(Language::Java.backend().body_indent(), 8);
    assert_eq!(Language::CSharp.backend().body_indent(), 8);
    assert_eq!(Language::Python.backend().body_indent(), 0);
    assert_eq!(Language::Groovy.backend().body_indent(), 0);
}
