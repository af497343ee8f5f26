//! Shared helpers for the parser, printer, and utility tests.

use crate::GraphQLSyntaxError;
use crate::ParseOptions;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::parse;

/// Parses `source` with default options, panicking with the formatted
/// error if it does not parse.
pub fn parse_ok(source: &str) -> Document {
    parse(source, ParseOptions::default())
        .unwrap_or_else(|err| panic!("failed to parse:\n{}", err.format_detailed(source)))
}

/// Parses `source` without locations, for structural comparisons.
pub fn parse_without_locations(source: &str) -> Document {
    parse(source, ParseOptions::new().with_no_location(true))
        .unwrap_or_else(|err| panic!("failed to parse:\n{}", err.format_detailed(source)))
}

/// Parses `source`, expecting a syntax error.
pub fn parse_err(source: &str) -> GraphQLSyntaxError {
    match parse(source, ParseOptions::default()) {
        Ok(document) => panic!("expected a syntax error, got: {document:?}"),
        Err(err) => err,
    }
}

/// The first definition of `document`, which must be an operation.
pub fn first_operation(document: &Document) -> &OperationDefinition {
    match document.definitions.first() {
        Some(Definition::OperationDefinition(operation)) => operation,
        other => panic!("expected an operation definition, got: {other:?}"),
    }
}

/// The first selection of `selection_set`, which must be a field.
pub fn first_field(selection_set: &SelectionSet) -> &Field {
    match selection_set.selections.first() {
        Some(Selection::Field(field)) => field,
        other => panic!("expected a field, got: {other:?}"),
    }
}

/// The value of the first argument of `field`.
pub fn first_arg_value(field: &Field) -> &Value {
    match field.arguments.first() {
        Some(argument) => &argument.value,
        None => panic!("expected at least one argument on `{}`", field.name.value),
    }
}
