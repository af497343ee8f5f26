//! Renders syntax trees back to canonical GraphQL source text.
//!
//! Output is deterministic and re-parses to an equal tree:
//!
//! - two-space indentation per nesting level
//! - an anonymous `query` with no variables or directives prints as a bare
//!   selection set
//! - field and directive arguments go one per line once the single-line
//!   `name(args)` segment would exceed [`MAX_LINE_LENGTH`] characters
//! - field and directive definition arguments go one per line once any of
//!   them spans several lines (i.e. carries a block string description)
//! - document definitions are separated by one blank line, with no
//!   trailing newline

use crate::ast::*;
use crate::block_string::print_block_string;
use crate::block_string::print_string;
use crate::inspect;

/// Width above which field and directive arguments are wrapped.
pub const MAX_LINE_LENGTH: usize = 80;

/// Failure to print a tree supplied in serialized form.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    /// The value has no `"kind"` field or names a kind that does not exist.
    /// `dump` is an [`inspect()`] rendering of the value.
    #[error("Invalid AST Node: {dump}.")]
    InvalidNode { dump: String },

    /// The kind is known but the value does not have that kind's shape.
    #[error("Malformed {kind} node: {source}")]
    MalformedNode {
        kind: Kind,
        source: serde_json::Error,
    },
}

/// Prints a node of any kind.
///
/// ```
/// use libgraphql_language::ParseOptions;
/// use libgraphql_language::parse;
/// use libgraphql_language::print;
///
/// let document = parse("query { id, name }", ParseOptions::default()).unwrap();
/// assert_eq!(print(&document), "{\n  id\n  name\n}");
/// ```
pub fn print<'a>(node: impl Into<NodeRef<'a>>) -> String {
    match node.into() {
        NodeRef::Name(name) => name.value.clone(),
        NodeRef::Document(document) => join(document.definitions.iter().map(print), "\n\n"),

        NodeRef::OperationDefinition(operation) => print_operation_definition(operation),
        NodeRef::VariableDefinition(variable_definition) => {
            print_variable_definition(variable_definition)
        },
        NodeRef::SelectionSet(selection_set) => {
            block(selection_set.selections.iter().map(print))
        },
        NodeRef::Field(field) => print_field(field),
        NodeRef::Argument(argument) => {
            format!("{}: {}", argument.name.value, print(&argument.value))
        },
        NodeRef::FragmentSpread(spread) => format!(
            "...{}{}",
            spread.name.value,
            wrap(" ", &print_all(&spread.directives, " "), ""),
        ),
        NodeRef::InlineFragment(inline) => join(
            [
                "...".to_string(),
                wrap("on ", &print_opt(inline.type_condition.as_ref()), ""),
                print_all(&inline.directives, " "),
                print(&inline.selection_set),
            ],
            " ",
        ),
        NodeRef::FragmentDefinition(fragment) => format!(
            "fragment {}{} on {} {}{}",
            fragment.name.value,
            wrap("(", &print_all(&fragment.variable_definitions, ", "), ")"),
            print(&fragment.type_condition),
            wrap("", &print_all(&fragment.directives, " "), " "),
            print(&fragment.selection_set),
        ),

        NodeRef::Variable(variable) => format!("${}", variable.name.value),
        NodeRef::IntValue(int) => int.value.clone(),
        NodeRef::FloatValue(float) => float.value.clone(),
        NodeRef::StringValue(string) if string.block => print_block_string(&string.value),
        NodeRef::StringValue(string) => print_string(&string.value),
        NodeRef::BooleanValue(boolean) => boolean.value.to_string(),
        NodeRef::NullValue(_) => "null".to_string(),
        NodeRef::EnumValue(enum_value) => enum_value.value.clone(),
        NodeRef::ListValue(list) => format!("[{}]", print_all(&list.values, ", ")),
        NodeRef::ObjectValue(object) => format!("{{{}}}", print_all(&object.fields, ", ")),
        NodeRef::ObjectField(field) => format!("{}: {}", field.name.value, print(&field.value)),

        NodeRef::Directive(directive) => print_directive(directive),

        NodeRef::NamedType(named) => named.name.value.clone(),
        NodeRef::ListType(list) => format!("[{}]", print(list.type_.as_ref())),
        NodeRef::NonNullType(non_null) => format!("{}!", print(&non_null.type_)),

        NodeRef::SchemaDefinition(schema) => with_description(
            schema.description.as_ref(),
            join(
                [
                    "schema".to_string(),
                    print_all(&schema.directives, " "),
                    block(schema.operation_types.iter().map(print)),
                ],
                " ",
            ),
        ),
        NodeRef::OperationTypeDefinition(operation_type) => format!(
            "{}: {}",
            operation_type.operation,
            print(&operation_type.type_),
        ),
        NodeRef::ScalarTypeDefinition(scalar) => with_description(
            scalar.description.as_ref(),
            join(
                [
                    "scalar".to_string(),
                    scalar.name.value.clone(),
                    print_all(&scalar.directives, " "),
                ],
                " ",
            ),
        ),
        NodeRef::ObjectTypeDefinition(object) => with_description(
            object.description.as_ref(),
            join(
                [
                    "type".to_string(),
                    object.name.value.clone(),
                    wrap("implements ", &print_all(&object.interfaces, " & "), ""),
                    print_all(&object.directives, " "),
                    block(object.fields.iter().map(print)),
                ],
                " ",
            ),
        ),
        NodeRef::FieldDefinition(field) => with_description(
            field.description.as_ref(),
            format!(
                "{}{}: {}{}",
                field.name.value,
                print_argument_definitions(&field.arguments),
                print(&field.type_),
                wrap(" ", &print_all(&field.directives, " "), ""),
            ),
        ),
        NodeRef::InputValueDefinition(input_value) => with_description(
            input_value.description.as_ref(),
            join(
                [
                    format!("{}: {}", input_value.name.value, print(&input_value.type_)),
                    wrap("= ", &print_opt(input_value.default_value.as_ref()), ""),
                    print_all(&input_value.directives, " "),
                ],
                " ",
            ),
        ),
        NodeRef::InterfaceTypeDefinition(interface) => with_description(
            interface.description.as_ref(),
            join(
                [
                    "interface".to_string(),
                    interface.name.value.clone(),
                    wrap("implements ", &print_all(&interface.interfaces, " & "), ""),
                    print_all(&interface.directives, " "),
                    block(interface.fields.iter().map(print)),
                ],
                " ",
            ),
        ),
        NodeRef::UnionTypeDefinition(union) => with_description(
            union.description.as_ref(),
            join(
                [
                    "union".to_string(),
                    union.name.value.clone(),
                    print_all(&union.directives, " "),
                    wrap("= ", &print_all(&union.types, " | "), ""),
                ],
                " ",
            ),
        ),
        NodeRef::EnumTypeDefinition(enum_type) => with_description(
            enum_type.description.as_ref(),
            join(
                [
                    "enum".to_string(),
                    enum_type.name.value.clone(),
                    print_all(&enum_type.directives, " "),
                    block(enum_type.values.iter().map(print)),
                ],
                " ",
            ),
        ),
        NodeRef::EnumValueDefinition(enum_value) => with_description(
            enum_value.description.as_ref(),
            join(
                [enum_value.name.value.clone(), print_all(&enum_value.directives, " ")],
                " ",
            ),
        ),
        NodeRef::InputObjectTypeDefinition(input) => with_description(
            input.description.as_ref(),
            join(
                [
                    "input".to_string(),
                    input.name.value.clone(),
                    print_all(&input.directives, " "),
                    block(input.fields.iter().map(print)),
                ],
                " ",
            ),
        ),
        NodeRef::DirectiveDefinition(directive) => with_description(
            directive.description.as_ref(),
            format!(
                "directive @{}{}{} on {}",
                directive.name.value,
                print_argument_definitions(&directive.arguments),
                if directive.repeatable { " repeatable" } else { "" },
                print_all(&directive.locations, " | "),
            ),
        ),

        NodeRef::SchemaExtension(schema) => join(
            [
                "extend schema".to_string(),
                print_all(&schema.directives, " "),
                block(schema.operation_types.iter().map(print)),
            ],
            " ",
        ),
        NodeRef::ScalarTypeExtension(scalar) => join(
            [
                "extend scalar".to_string(),
                scalar.name.value.clone(),
                print_all(&scalar.directives, " "),
            ],
            " ",
        ),
        NodeRef::ObjectTypeExtension(object) => join(
            [
                "extend type".to_string(),
                object.name.value.clone(),
                wrap("implements ", &print_all(&object.interfaces, " & "), ""),
                print_all(&object.directives, " "),
                block(object.fields.iter().map(print)),
            ],
            " ",
        ),
        NodeRef::InterfaceTypeExtension(interface) => join(
            [
                "extend interface".to_string(),
                interface.name.value.clone(),
                wrap("implements ", &print_all(&interface.interfaces, " & "), ""),
                print_all(&interface.directives, " "),
                block(interface.fields.iter().map(print)),
            ],
            " ",
        ),
        NodeRef::UnionTypeExtension(union) => join(
            [
                "extend union".to_string(),
                union.name.value.clone(),
                print_all(&union.directives, " "),
                wrap("= ", &print_all(&union.types, " | "), ""),
            ],
            " ",
        ),
        NodeRef::EnumTypeExtension(enum_type) => join(
            [
                "extend enum".to_string(),
                enum_type.name.value.clone(),
                print_all(&enum_type.directives, " "),
                block(enum_type.values.iter().map(print)),
            ],
            " ",
        ),
        NodeRef::InputObjectTypeExtension(input) => join(
            [
                "extend input".to_string(),
                input.name.value.clone(),
                print_all(&input.directives, " "),
                block(input.fields.iter().map(print)),
            ],
            " ",
        ),
    }
}

/// Prints a tree given in its serialized (JSON) form.
///
/// This is the entry point for trees that did not come from this crate's
/// parser, so the input is checked: a value without a recognized `"kind"`
/// fails with [`PrintError::InvalidNode`].
pub fn print_json(value: &serde_json::Value) -> Result<String, PrintError> {
    match AstNode::from_json(value) {
        Ok(Some(node)) => Ok(print(&node)),
        Ok(None) => Err(PrintError::InvalidNode {
            dump: inspect(value),
        }),
        Err(source) => {
            let kind = value
                .get("kind")
                .and_then(serde_json::Value::as_str)
                .and_then(Kind::from_name);
            match kind {
                Some(kind) => Err(PrintError::MalformedNode { kind, source }),
                None => Err(PrintError::InvalidNode {
                    dump: inspect(value),
                }),
            }
        },
    }
}

// =========================================================
// Executable definitions
// =========================================================

fn print_operation_definition(operation: &OperationDefinition) -> String {
    let variable_definitions = wrap("(", &print_all(&operation.variable_definitions, ", "), ")");
    let prefix = join(
        [
            operation.operation.as_str().to_string(),
            join(
                [print_opt(operation.name.as_ref()), variable_definitions],
                "",
            ),
            print_all(&operation.directives, " "),
        ],
        " ",
    );

    // Anonymous queries print in shorthand form.
    let selection_set = print(&operation.selection_set);
    if prefix == "query" {
        selection_set
    } else {
        format!("{prefix} {selection_set}")
    }
}

fn print_variable_definition(variable_definition: &VariableDefinition) -> String {
    format!(
        "{}: {}{}{}",
        print(&variable_definition.variable),
        print(&variable_definition.type_),
        wrap(" = ", &print_opt(variable_definition.default_value.as_ref()), ""),
        wrap(" ", &print_all(&variable_definition.directives, " "), ""),
    )
}

fn print_field(field: &Field) -> String {
    let prefix = match &field.alias {
        Some(alias) => format!("{}: {}", alias.value, field.name.value),
        None => field.name.value.clone(),
    };
    join(
        [
            print_arguments(prefix, &field.arguments),
            print_all(&field.directives, " "),
            print_opt(field.selection_set.as_ref()),
        ],
        " ",
    )
}

fn print_directive(directive: &Directive) -> String {
    print_arguments(format!("@{}", directive.name.value), &directive.arguments)
}

/// `prefix(a: 1, b: 2)`, or one argument per line when that would be
/// longer than [`MAX_LINE_LENGTH`].
fn print_arguments(prefix: String, arguments: &[Argument]) -> String {
    let single_line = format!("{prefix}{}", wrap("(", &print_all(arguments, ", "), ")"));
    if single_line.chars().count() <= MAX_LINE_LENGTH {
        return single_line;
    }
    format!(
        "{prefix}{}",
        wrap("(\n", &indent(&print_all(arguments, "\n")), "\n)"),
    )
}

// =========================================================
// Type system definitions
// =========================================================

/// Argument definitions print inline unless one of them spans several
/// lines.
fn print_argument_definitions(arguments: &[InputValueDefinition]) -> String {
    let printed: Vec<String> = arguments.iter().map(print).collect();
    if printed.iter().any(|argument| argument.contains('\n')) {
        wrap("(\n", &indent(&join(printed, "\n")), "\n)")
    } else {
        wrap("(", &join(printed, ", "), ")")
    }
}

fn with_description(description: Option<&StringValue>, definition: String) -> String {
    format!("{}{definition}", wrap("", &print_opt(description), "\n"))
}

// =========================================================
// Formatting helpers
// =========================================================

/// Joins the non-empty parts with `separator`.
fn join(parts: impl IntoIterator<Item = String>, separator: &str) -> String {
    let mut joined = String::new();
    for part in parts.into_iter().filter(|part| !part.is_empty()) {
        if !joined.is_empty() {
            joined.push_str(separator);
        }
        joined.push_str(&part);
    }
    joined
}

/// `start + text + end`, or nothing when `text` is empty.
fn wrap(start: &str, text: &str, end: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{start}{text}{end}")
}

fn indent(text: &str) -> String {
    wrap("  ", &text.replace('\n', "\n  "), "")
}

/// `{`, then each item on its own indented line, then `}`.
fn block(items: impl IntoIterator<Item = String>) -> String {
    wrap("{\n", &indent(&join(items, "\n")), "\n}")
}

fn print_all<'a, T>(nodes: &'a [T], separator: &str) -> String
where
    &'a T: Into<NodeRef<'a>>,
{
    join(nodes.iter().map(print), separator)
}

fn print_opt<'a, T>(node: Option<&'a T>) -> String
where
    &'a T: Into<NodeRef<'a>>,
{
    node.map(print).unwrap_or_default()
}
