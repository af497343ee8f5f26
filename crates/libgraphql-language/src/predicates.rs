//! Classification of nodes by kind.
//!
//! Every predicate except [`is_const_value_node()`] is a membership test on
//! [`Kind`]. Pass a [`NodeRef`] (or any node) through `.kind()` to classify
//! a node.

use crate::ast::Kind;
use crate::ast::Value;

/// Any of the 17 top-level definition kinds.
pub fn is_definition_node(kind: Kind) -> bool {
    is_executable_definition_node(kind)
        || is_type_system_definition_node(kind)
        || is_type_system_extension_node(kind)
}

/// `OperationDefinition` or `FragmentDefinition`.
pub fn is_executable_definition_node(kind: Kind) -> bool {
    matches!(kind, Kind::OperationDefinition | Kind::FragmentDefinition)
}

/// `Field`, `FragmentSpread`, or `InlineFragment`.
pub fn is_selection_node(kind: Kind) -> bool {
    matches!(kind, Kind::Field | Kind::FragmentSpread | Kind::InlineFragment)
}

pub fn is_value_node(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Variable
            | Kind::IntValue
            | Kind::FloatValue
            | Kind::StringValue
            | Kind::BooleanValue
            | Kind::NullValue
            | Kind::EnumValue
            | Kind::ListValue
            | Kind::ObjectValue
    )
}

/// Returns `true` if `value` contains no [`Variable`](crate::ast::Variable)
/// anywhere within it.
pub fn is_const_value_node(value: &Value) -> bool {
    match value {
        Value::Variable(_) => false,
        Value::List(list) => list.values.iter().all(is_const_value_node),
        Value::Object(object) => object
            .fields
            .iter()
            .all(|field| is_const_value_node(&field.value)),
        Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Boolean(_)
        | Value::Null(_)
        | Value::Enum(_) => true,
    }
}

/// `NamedType`, `ListType`, or `NonNullType`.
pub fn is_type_node(kind: Kind) -> bool {
    matches!(kind, Kind::NamedType | Kind::ListType | Kind::NonNullType)
}

/// The schema definition, the six type definitions, and directive
/// definitions.
pub fn is_type_system_definition_node(kind: Kind) -> bool {
    matches!(kind, Kind::SchemaDefinition | Kind::DirectiveDefinition)
        || is_type_definition_node(kind)
}

pub fn is_type_definition_node(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::ScalarTypeDefinition
            | Kind::ObjectTypeDefinition
            | Kind::InterfaceTypeDefinition
            | Kind::UnionTypeDefinition
            | Kind::EnumTypeDefinition
            | Kind::InputObjectTypeDefinition
    )
}

/// The schema extension and the six type extensions.
pub fn is_type_system_extension_node(kind: Kind) -> bool {
    kind == Kind::SchemaExtension || is_type_extension_node(kind)
}

pub fn is_type_extension_node(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::ScalarTypeExtension
            | Kind::ObjectTypeExtension
            | Kind::InterfaceTypeExtension
            | Kind::UnionTypeExtension
            | Kind::EnumTypeExtension
            | Kind::InputObjectTypeExtension
    )
}
