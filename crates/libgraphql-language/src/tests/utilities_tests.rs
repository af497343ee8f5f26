//! Tests for the tree-level utilities.

use crate::ParseOptions;
use crate::UntypedValue;
use crate::Variables;
use crate::ast::Document;
use crate::ast::Value;
use crate::concat_ast;
use crate::get_operation_ast;
use crate::natural_compare;
use crate::parse_value;
use crate::print;
use crate::sort_value_node;
use crate::tests::utils::first_arg_value;
use crate::tests::utils::first_field;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_ok;
use crate::tests::utils::parse_without_locations;
use crate::value_from_ast_untyped;
use serde_json::json;
use std::cmp::Ordering;

fn value(source: &str) -> Value {
    parse_value(source, ParseOptions::default()).unwrap()
}

// =============================================================================
// concat_ast
// =============================================================================

/// Definitions are concatenated in document order.
#[test]
fn concat_ast_joins_definitions_in_order() {
    let documents = [
        parse_ok("{ a }"),
        parse_ok("type T { f: Int } fragment F on T { f }"),
        parse_ok("query B { b }"),
    ];
    let combined = concat_ast(&documents);
    assert_eq!(combined.definitions.len(), 4);
    assert!(combined.loc.is_none());
    assert_eq!(
        print(&combined),
        "{\n  a\n}\n\ntype T {\n  f: Int\n}\n\nfragment F on T {\n  f\n}\n\nquery B {\n  b\n}",
    );

    assert!(concat_ast(&[]).definitions.is_empty());
}

// =============================================================================
// get_operation_ast
// =============================================================================

/// Without a name, only a document with exactly one operation yields it.
#[test]
fn get_operation_ast_without_name() {
    let single = parse_ok("fragment F on T { a } { b }");
    let operation = get_operation_ast(&single, None).unwrap();
    assert!(operation.name.is_none());

    let named = parse_ok("query Q { a } type T { f: Int }");
    let operation = get_operation_ast(&named, None).unwrap();
    assert_eq!(operation.name.as_ref().unwrap().value, "Q");

    assert!(get_operation_ast(&parse_ok("query A { a } query B { b }"), None).is_none());
    assert!(get_operation_ast(&parse_ok("fragment F on T { a }"), None).is_none());
}

/// With a name, the operation with that exact name is returned.
#[test]
fn get_operation_ast_with_name() {
    let document = parse_ok("query A { a } mutation B { b } subscription C { c } { d }");
    for name in ["A", "B", "C"] {
        let operation = get_operation_ast(&document, Some(name)).unwrap();
        assert_eq!(operation.name.as_ref().unwrap().value, name);
    }
    assert!(get_operation_ast(&document, Some("D")).is_none());
    assert!(get_operation_ast(&document, Some("a")).is_none());
}

/// A name never matches an anonymous operation, and a fragment of that
/// name is not an operation.
#[test]
fn get_operation_ast_with_name_and_no_named_operation() {
    assert!(get_operation_ast(&parse_ok("{ a }"), Some("Q")).is_none());
    assert!(get_operation_ast(&parse_ok("fragment F on T { a }"), Some("F")).is_none());
    assert!(get_operation_ast(&parse_ok("type Q { a: Int }"), Some("Q")).is_none());
}

// =============================================================================
// sort_value_node
// =============================================================================

/// Object fields are sorted by natural order at every depth; lists keep
/// their order.
#[test]
fn sort_value_node_orders_fields() {
    let sorted = sort_value_node(&value("{ b: 1, a: { d: 1, c: 2 }, a10: 1, a2: 1 }"));
    assert_eq!(print(&sorted), "{a: {c: 2, d: 1}, a2: 1, a10: 1, b: 1}");

    let sorted = sort_value_node(&value("[{ z: 1, y: 2 }, 3, { x: [{ b: 1, a: 2 }] }]"));
    assert_eq!(print(&sorted), "[{y: 2, z: 1}, 3, {x: [{a: 2, b: 1}]}]");
}

/// Sorting a sorted value changes nothing, and the input is untouched.
#[test]
fn sort_value_node_is_idempotent() {
    let original = value("{ b: 1, a: { d: 1, c: 2 }, a10: 1, a2: 1 }");
    let printed_before = print(&original);
    let once = sort_value_node(&original);
    assert_eq!(sort_value_node(&once), once);
    assert_eq!(print(&original), printed_before);
}

/// Scalars come back unchanged.
#[test]
fn sort_value_node_keeps_scalars() {
    for source in ["1", "\"s\"", "$v", "ENUM", "null", "true", "1.5"] {
        let scalar = value(source);
        assert_eq!(sort_value_node(&scalar), scalar, "{source}");
    }
}

// =============================================================================
// natural_compare
// =============================================================================

/// Digit runs compare by value, everything else by code point.
#[test]
fn natural_compare_orders_numbers_by_value() {
    let cases = [
        ("a", "a", Ordering::Equal),
        ("a", "b", Ordering::Less),
        ("a2", "a10", Ordering::Less),
        ("a10", "a2", Ordering::Greater),
        ("2", "11", Ordering::Less),
        ("02", "11", Ordering::Less),
        ("0", "00", Ordering::Less),
        ("a01", "a1", Ordering::Greater),
        ("abc", "abcd", Ordering::Less),
        ("", "a", Ordering::Less),
        ("Z", "a", Ordering::Less),
        ("x99999999999999999999999", "x100000000000000000000000", Ordering::Less),
    ];
    for (a, b, expected) in cases {
        assert_eq!(natural_compare(a, b), expected, "{a:?} vs {b:?}");
    }
}

/// Sorting a list of names with natural order.
#[test]
fn natural_compare_sorts_names() {
    let mut names = vec!["file10", "file2", "file1", "File3", "file02"];
    names.sort_by(|a, b| natural_compare(a, b));
    assert_eq!(names, vec!["File3", "file1", "file2", "file02", "file10"]);
}

// =============================================================================
// value_from_ast_untyped
// =============================================================================

/// Literals convert to host values.
#[test]
fn converts_literals() {
    assert_eq!(value_from_ast_untyped(&value("null"), None), UntypedValue::Null);
    assert_eq!(value_from_ast_untyped(&value("true"), None), UntypedValue::Boolean(true));
    assert_eq!(value_from_ast_untyped(&value("123"), None), UntypedValue::Int(123));
    assert_eq!(value_from_ast_untyped(&value("-1.5e3"), None), UntypedValue::Float(-1500.0));
    assert_eq!(
        value_from_ast_untyped(&value("\"abc\""), None),
        UntypedValue::String("abc".to_string()),
    );
    assert_eq!(
        value_from_ast_untyped(&value("ENUM_VALUE"), None),
        UntypedValue::String("ENUM_VALUE".to_string()),
    );
}

/// Nested lists and objects convert element by element.
#[test]
fn converts_nested_values() {
    let converted = value_from_ast_untyped(&value("{ foo: [ { bar: \"baz\" } ] }"), None);
    assert_eq!(converted.to_json(), Some(json!({"foo": [{"bar": "baz"}]})));
}

/// Integers too large for an `i64` become floats.
#[test]
fn converts_oversized_ints_to_floats() {
    assert_eq!(
        value_from_ast_untyped(&value("9223372036854775807"), None),
        UntypedValue::Int(i64::MAX),
    );
    assert_eq!(
        value_from_ast_untyped(&value("9223372036854775808"), None),
        UntypedValue::Float(9223372036854775808.0),
    );
}

/// A repeated object field keeps its first position and takes the later
/// value.
#[test]
fn later_duplicate_field_wins() {
    let converted = value_from_ast_untyped(&value("{ a: 1, b: 2, a: 3 }"), None);
    let UntypedValue::Object(fields) = converted else {
        panic!("expected an object");
    };
    let entries: Vec<(&str, &UntypedValue)> =
        fields.iter().map(|(key, value)| (key.as_str(), value)).collect();
    assert_eq!(entries, vec![("a", &UntypedValue::Int(3)), ("b", &UntypedValue::Int(2))]);
}

/// Variables resolve from the supplied map, and are `Undefined` when
/// missing.
#[test]
fn resolves_variables() {
    let mut variables = Variables::new();
    variables.insert("testVariable".to_string(), UntypedValue::String("foo".to_string()));
    variables.insert("nothing".to_string(), UntypedValue::Null);

    assert_eq!(
        value_from_ast_untyped(&value("$testVariable"), Some(&variables)),
        UntypedValue::String("foo".to_string()),
    );
    assert_eq!(value_from_ast_untyped(&value("$nothing"), Some(&variables)), UntypedValue::Null);
    assert!(value_from_ast_untyped(&value("$missing"), Some(&variables)).is_undefined());
    assert!(value_from_ast_untyped(&value("$testVariable"), None).is_undefined());

    let converted = value_from_ast_untyped(
        &value("{ a: $testVariable, b: $missing, c: [$missing] }"),
        Some(&variables),
    );
    assert_eq!(converted.to_json(), Some(json!({"a": "foo", "c": [null]})));
}

/// JSON variables convert to untyped values.
#[test]
fn converts_json_variables() {
    let json = json!({"n": 1, "f": 1.5, "list": [true, null], "s": "x"});
    let converted = UntypedValue::from(&json);
    assert_eq!(converted.to_json(), Some(json));
}

/// Locations do not affect conversion.
#[test]
fn ignores_locations() {
    let document = parse_without_locations("{ f(a: { x: [1, 2] }) }");
    let with_locations = parse_ok("{ f(a: { x: [1, 2] }) }");
    let arg = |document: &Document| {
        let field = first_field(&first_operation(document).selection_set);
        value_from_ast_untyped(first_arg_value(field), None)
    };
    assert_eq!(arg(&document), arg(&with_locations));
}
