//! Tests for parsing type-system definitions and extensions.

use crate::ast::Definition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::OperationType;
use crate::ast::Type;
use crate::ast::Value;
use crate::tests::utils::parse_ok;

fn only_definition(document: &Document) -> &Definition {
    assert_eq!(document.definitions.len(), 1, "{document:?}");
    &document.definitions[0]
}

// =============================================================================
// Type definitions
// =============================================================================

/// An object type with one field.
#[test]
fn parses_simple_object_type() {
    let source = "type Hello { world: String }";
    let document = parse_ok(source);
    let Definition::ObjectTypeDefinition(object) = only_definition(&document) else {
        panic!("expected an object type definition");
    };
    assert_eq!(object.name.value, "Hello");
    assert!(object.description.is_none());
    assert!(object.interfaces.is_empty());
    assert_eq!(object.fields.len(), 1);

    let field = &object.fields[0];
    assert_eq!(field.name.value, "world");
    assert!(matches!(&field.type_, Type::Named(named) if named.name.value == "String"));
    assert_eq!(field.loc.as_ref().unwrap().source_text(), Some("world: String"));
    assert_eq!(object.loc.as_ref().unwrap().source_text(), Some(source));
}

/// An object type without a field list.
#[test]
fn parses_object_type_without_fields() {
    let document = parse_ok("type Hello @key(fields: \"id\")");
    let Definition::ObjectTypeDefinition(object) = only_definition(&document) else {
        panic!("expected an object type definition");
    };
    assert!(object.fields.is_empty());
    assert_eq!(object.directives[0].name.value, "key");
}

/// String and block string descriptions attach to the definition and are
/// included in its location.
#[test]
fn parses_descriptions() {
    let source = "\"\"\"\n  The greeting\n  type.\n\"\"\"\ntype Hello {\n  \"The world\" world: String\n}";
    let document = parse_ok(source);
    let Definition::ObjectTypeDefinition(object) = only_definition(&document) else {
        panic!("expected an object type definition");
    };
    let description = object.description.as_ref().unwrap();
    assert!(description.block);
    assert_eq!(description.value, "The greeting\ntype.");
    assert_eq!(object.loc.as_ref().unwrap().start, 0);

    let field_description = object.fields[0].description.as_ref().unwrap();
    assert!(!field_description.block);
    assert_eq!(field_description.value, "The world");
}

/// `implements` with and without a leading `&`.
#[test]
fn parses_implemented_interfaces() {
    for source in [
        "type Hello implements World & Other { field: String }",
        "type Hello implements & World & Other { field: String }",
    ] {
        let document = parse_ok(source);
        let Definition::ObjectTypeDefinition(object) = only_definition(&document) else {
            panic!("expected an object type definition");
        };
        let names: Vec<&str> = object.interfaces.iter().map(|i| i.name.value.as_str()).collect();
        assert_eq!(names, vec!["World", "Other"], "{source}");
    }
}

/// Field arguments with defaults, descriptions, and directives.
#[test]
fn parses_field_arguments() {
    let document = parse_ok(
        "type Hello { world(\"the flag\" flag: Boolean = true @d, ids: [ID!] = [1, 2]): String }",
    );
    let Definition::ObjectTypeDefinition(object) = only_definition(&document) else {
        panic!("expected an object type definition");
    };
    let arguments = &object.fields[0].arguments;
    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments[0].name.value, "flag");
    assert_eq!(arguments[0].description.as_ref().unwrap().value, "the flag");
    assert!(matches!(&arguments[0].default_value, Some(Value::Boolean(b)) if b.value));
    assert_eq!(arguments[0].directives[0].name.value, "d");
    assert!(matches!(&arguments[1].default_value, Some(Value::List(list)) if list.values.len() == 2));
}

/// Interfaces may implement other interfaces.
#[test]
fn parses_interface_type() {
    let document = parse_ok("interface Node implements Entity { id: ID! }");
    let Definition::InterfaceTypeDefinition(interface) = only_definition(&document) else {
        panic!("expected an interface type definition");
    };
    assert_eq!(interface.name.value, "Node");
    assert_eq!(interface.interfaces[0].name.value, "Entity");
    assert!(matches!(interface.fields[0].type_, Type::NonNull(_)));
}

/// Union members, with an optional leading `|`.
#[test]
fn parses_union_type() {
    for source in ["union Hello = Wo | Rld", "union Hello = | Wo | Rld"] {
        let document = parse_ok(source);
        let Definition::UnionTypeDefinition(union) = only_definition(&document) else {
            panic!("expected a union type definition");
        };
        let names: Vec<&str> = union.types.iter().map(|t| t.name.value.as_str()).collect();
        assert_eq!(names, vec!["Wo", "Rld"], "{source}");
    }

    let document = parse_ok("union Hello");
    let Definition::UnionTypeDefinition(union) = only_definition(&document) else {
        panic!("expected a union type definition");
    };
    assert!(union.types.is_empty());
}

/// Scalars, enums, and input objects.
#[test]
fn parses_scalar_enum_and_input_types() {
    let document = parse_ok(
        "scalar DateTime @specifiedBy(url: \"https://example.com\")\n\
         enum Color { RED \"green\" GREEN BLUE @deprecated }\n\
         input Point { x: Float! = 0, y: Float! }",
    );
    assert_eq!(document.definitions.len(), 3);

    let Definition::ScalarTypeDefinition(scalar) = &document.definitions[0] else {
        panic!("expected a scalar type definition");
    };
    assert_eq!(scalar.name.value, "DateTime");
    assert_eq!(scalar.directives.len(), 1);

    let Definition::EnumTypeDefinition(color) = &document.definitions[1] else {
        panic!("expected an enum type definition");
    };
    let values: Vec<&str> = color.values.iter().map(|v| v.name.value.as_str()).collect();
    assert_eq!(values, vec!["RED", "GREEN", "BLUE"]);
    assert_eq!(color.values[1].description.as_ref().unwrap().value, "green");
    assert_eq!(color.values[2].directives[0].name.value, "deprecated");

    let Definition::InputObjectTypeDefinition(point) = &document.definitions[2] else {
        panic!("expected an input object type definition");
    };
    assert_eq!(point.fields.len(), 2);
    assert!(matches!(&point.fields[0].default_value, Some(Value::Int(i)) if i.value == "0"));
    assert!(point.fields[1].default_value.is_none());
}

/// Directive definitions with arguments, `repeatable`, and locations.
#[test]
fn parses_directive_definition() {
    let document = parse_ok(
        "directive @include2(if: Boolean!) repeatable on\n  | FIELD\n  | FRAGMENT_SPREAD\n  | INLINE_FRAGMENT",
    );
    let Definition::DirectiveDefinition(directive) = only_definition(&document) else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name.value, "include2");
    assert_eq!(directive.arguments.len(), 1);
    assert!(directive.repeatable);

    let locations: Vec<DirectiveLocation> = directive
        .locations
        .iter()
        .filter_map(|location| DirectiveLocation::from_name(&location.value))
        .collect();
    assert_eq!(
        locations,
        vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ],
    );
    assert!(locations.iter().all(DirectiveLocation::is_executable));

    let document = parse_ok("directive @key on OBJECT | INTERFACE");
    let Definition::DirectiveDefinition(directive) = only_definition(&document) else {
        panic!("expected a directive definition");
    };
    assert!(!directive.repeatable);
}

/// The schema definition lists root operation types.
#[test]
fn parses_schema_definition() {
    let document = parse_ok("schema @d { query: Query mutation: Mutation subscription: Sub }");
    let Definition::SchemaDefinition(schema) = only_definition(&document) else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.directives.len(), 1);
    let roots: Vec<(OperationType, &str)> = schema
        .operation_types
        .iter()
        .map(|root| (root.operation, root.type_.name.value.as_str()))
        .collect();
    assert_eq!(
        roots,
        vec![
            (OperationType::Query, "Query"),
            (OperationType::Mutation, "Mutation"),
            (OperationType::Subscription, "Sub"),
        ],
    );
}

// =============================================================================
// Extensions
// =============================================================================

/// Every extension kind parses when it adds something.
#[test]
fn parses_every_extension_kind() {
    let document = parse_ok(
        "extend schema @d\n\
         extend schema { subscription: Sub }\n\
         extend scalar S @d\n\
         extend type T implements I\n\
         extend type T { f: Int }\n\
         extend interface I @d\n\
         extend union U = A | B\n\
         extend enum E { C }\n\
         extend input In { f: Int }",
    );
    let kinds: Vec<&str> = document
        .definitions
        .iter()
        .map(|definition| definition.kind().as_str())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "SchemaExtension",
            "SchemaExtension",
            "ScalarTypeExtension",
            "ObjectTypeExtension",
            "ObjectTypeExtension",
            "InterfaceTypeExtension",
            "UnionTypeExtension",
            "EnumTypeExtension",
            "InputObjectTypeExtension",
        ],
    );

    let Definition::ObjectTypeExtension(extension) = &document.definitions[4] else {
        panic!("expected an object type extension");
    };
    assert_eq!(extension.name.value, "T");
    assert_eq!(extension.fields[0].name.value, "f");
    assert_eq!(
        extension.loc.as_ref().unwrap().source_text(),
        Some("extend type T { f: Int }"),
    );
}

/// Executable and type-system definitions can share a document.
#[test]
fn parses_mixed_documents() {
    let document = parse_ok("type Query { a: Int }\nquery { a }\nfragment F on Query { a }");
    let kinds: Vec<&str> = document
        .definitions
        .iter()
        .map(|definition| definition.kind().as_str())
        .collect();
    assert_eq!(kinds, vec!["ObjectTypeDefinition", "OperationDefinition", "FragmentDefinition"]);
}
