//! Tests for parser error messages, positions, kinds, notes, and
//! formatting.

use crate::GraphQLErrorNoteKind;
use crate::ParseOptions;
use crate::Source;
use crate::SourcePosition;
use crate::SyntaxErrorKind;
use crate::parse;
use crate::tests::utils::parse_err;

/// Each malformed document fails with the expected message at the
/// expected line and column.
#[test]
fn reports_message_and_location() {
    let cases = [
        ("{", "Expected Name, found <EOF>.", (1, 2)),
        ("{ ...MissingOn }\nfragment MissingOn Type", "Expected \"on\", found Name \"Type\".", (2, 20)),
        ("{ field: {} }", "Expected Name, found \"{\".", (1, 10)),
        ("notAnOperation Foo { field }", "Unexpected Name \"notAnOperation\".", (1, 1)),
        ("...", "Unexpected \"...\".", (1, 1)),
        ("{ \"\"", "Expected Name, found String \"\".", (1, 3)),
        ("query", "Expected \"{\", found <EOF>.", (1, 6)),
        ("", "Unexpected <EOF>.", (1, 1)),
        ("{ ... on }", "Expected Name, found \"}\".", (1, 10)),
        ("query Q($a Int) { f }", "Expected \":\", found Name \"Int\".", (1, 12)),
        ("{ f(a: ) }", "Unexpected \")\".", (1, 8)),
        ("query Q { a }\n\n  }", "Unexpected \"}\".", (3, 3)),
    ];
    for (source, message, (line, column)) in cases {
        let err = parse_err(source);
        assert_eq!(err.message(), message, "message for {source:?}");
        assert_eq!(err.location(), SourcePosition::new(line, column), "location for {source:?}");
    }
}

/// Token mismatches record what was expected and what was found.
#[test]
fn unexpected_token_kind_carries_details() {
    let err = parse_err("{ field: {} }");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedToken {
            expected: Some("Name".to_string()),
            found: "\"{\"".to_string(),
        },
    );

    let err = parse_err("notAnOperation");
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::UnexpectedToken {
            expected: None,
            found: "Name \"notAnOperation\"".to_string(),
        },
    );
}

/// Lexical errors surface unchanged through the parser.
#[test]
fn lexical_errors_surface_through_parser() {
    let err = parse_err("{ f(a: \"unterminated) }");
    assert_eq!(err.kind(), &SyntaxErrorKind::UnterminatedString);

    let err = parse_err("{ f(a: 01) }");
    assert_eq!(err.kind(), &SyntaxErrorKind::InvalidNumber);
}

/// `on` cannot name a fragment.
#[test]
fn rejects_on_as_fragment_name() {
    let err = parse_err("fragment on on on { on }");
    assert_eq!(err.message(), "Unexpected Name \"on\".");
    assert_eq!(err.kind(), &SyntaxErrorKind::ReservedName { name: "on".to_string() });
    assert_eq!(err.location(), SourcePosition::new(1, 10));
    assert_eq!(err.notes()[0].kind, GraphQLErrorNoteKind::Help);

    let err = parse_err("{ ...on }");
    assert_eq!(err.message(), "Expected Name, found \"}\".");
}

/// `true`, `false`, and `null` cannot name enum values.
#[test]
fn rejects_reserved_enum_values() {
    for reserved in ["true", "false", "null"] {
        let err = parse_err(&format!("enum Test {{ VALID, {reserved} }}"));
        assert_eq!(
            err.message(),
            format!("Name \"{reserved}\" is reserved and cannot be used for an enum value."),
        );
        assert_eq!(err.kind(), &SyntaxErrorKind::ReservedName { name: reserved.to_string() });
        assert_eq!(err.notes()[0].kind, GraphQLErrorNoteKind::Spec);
    }
}

/// Descriptions are only allowed on type-system definitions.
#[test]
fn rejects_descriptions_on_executable_definitions() {
    let err = parse_err("\"Description\" query { a }");
    assert_eq!(err.kind(), &SyntaxErrorKind::InvalidDescription);
    assert_eq!(
        err.message(),
        "Unexpected description, descriptions are supported only on type definitions.",
    );
    assert_eq!(err.location(), SourcePosition::new(1, 1));

    let err = parse_err("\"\"\"Description\"\"\" extend type Foo @d");
    assert_eq!(err.kind(), &SyntaxErrorKind::InvalidDescription);

    let err = parse_err("\"Description\" { a }");
    assert_eq!(err.message(), "Unexpected \"{\".");
}

/// Extensions must add something.
#[test]
fn rejects_empty_extensions() {
    let cases = [
        ("extend schema", "Unexpected <EOF>."),
        ("extend scalar Foo", "Unexpected <EOF>."),
        ("extend type Foo", "Unexpected <EOF>."),
        ("extend interface Foo", "Unexpected <EOF>."),
        ("extend union Foo", "Unexpected <EOF>."),
        ("extend enum Foo", "Unexpected <EOF>."),
        ("extend input Foo", "Unexpected <EOF>."),
        ("extend foo Bar", "Unexpected Name \"foo\"."),
        ("extend directive @foo on FIELD", "Unexpected Name \"directive\"."),
    ];
    for (source, message) in cases {
        assert_eq!(parse_err(source).message(), message, "message for {source:?}");
    }
}

/// Directive locations must come from the closed set.
#[test]
fn rejects_unknown_directive_location() {
    let err = parse_err("directive @foo on FIELD | INCORRECT_LOCATION");
    assert_eq!(err.message(), "Unexpected Name \"INCORRECT_LOCATION\".");
    assert_eq!(err.location(), SourcePosition::new(1, 27));
}

/// Lists that require at least one item reject empty brackets.
#[test]
fn rejects_empty_required_lists() {
    let cases = [
        ("{}", "Expected Name, found \"}\"."),
        ("query Q() { a }", "Expected \"$\", found \")\"."),
        ("{ f() }", "Expected Name, found \")\"."),
        ("type Hello { }", "Expected Name, found \"}\"."),
        ("schema { }", "Expected Name, found \"}\"."),
    ];
    for (source, message) in cases {
        assert_eq!(parse_err(source).message(), message, "message for {source:?}");
    }
}

/// The error carries the name of the source it came from.
#[test]
fn errors_name_their_source() {
    let err = parse(Source::with_name("{", "schema.graphql"), ParseOptions::default())
        .unwrap_err();
    assert_eq!(err.source_name(), "schema.graphql");
    assert_eq!(err.format_oneline(), "schema.graphql:1:2: error: Expected Name, found <EOF>.");

    assert_eq!(parse_err("{").source_name(), "GraphQL request");
}

/// The detailed format shows the offending line with a caret under the
/// error column.
#[test]
fn formats_detailed_diagnostic() {
    let source = "{ field: {} }";
    let detailed = parse_err(source).format_detailed(source);
    assert_eq!(
        detailed,
        concat!(
            "error: Expected Name, found \"{\".\n",
            "  --> GraphQL request:1:10\n",
            "   |\n",
            " 1 | { field: {} }\n",
            "   |          ^\n",
        ),
    );
}

/// Notes pointing elsewhere in the source get their own snippet.
#[test]
fn formats_notes_with_positions() {
    let source = "{ f(a: \"oops\n) }";
    let detailed = parse_err(source).format_detailed(source);
    assert!(detailed.starts_with("error: Unterminated string.\n"), "{detailed}");
    assert!(detailed.contains("   = note: String started here\n"), "{detailed}");
    assert!(detailed.ends_with(" 1 | { f(a: \"oops\n   |        -\n"), "{detailed}");
}
