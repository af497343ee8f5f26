use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

// =========================================================
// Schema
// =========================================================

/// `schema @directives { query: Query ... }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct SchemaDefinition {
    pub description: Option<StringValue>,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default)]
    pub operation_types: Vec<OperationTypeDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// `query: Query` inside a schema definition or extension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct OperationTypeDefinition {
    pub operation: OperationType,

    #[serde(rename = "type")]
    pub type_: NamedType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// =========================================================
// Type definitions
// =========================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct ScalarTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// `type Name implements A & B @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct ObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub interfaces: Vec<NamedType>,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// `name(args): Type @directives` inside an object or interface type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct FieldDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,

    #[serde(rename = "type")]
    pub type_: Type,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// An argument definition or an input object field: `name: Type = default`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct InputValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(rename = "type")]
    pub type_: Type,

    pub default_value: Option<Value>,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct InterfaceTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub interfaces: Vec<NamedType>,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// `union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct UnionTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default)]
    pub types: Vec<NamedType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct EnumTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default)]
    pub values: Vec<EnumValueDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct EnumValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct InputObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default)]
    pub fields: Vec<InputValueDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// =========================================================
// Directive definitions
// =========================================================

/// `directive @name(args) repeatable on LOCATION | ...`
///
/// Each entry of `locations` is guaranteed by the parser to name a
/// [`DirectiveLocation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct DirectiveDefinition {
    pub description: Option<StringValue>,
    pub name: Name,

    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,

    #[serde(default)]
    pub repeatable: bool,

    #[serde(default)]
    pub locations: Vec<Name>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A place a directive may be applied.
///
/// See
/// [Directive Locations](https://spec.graphql.org/October2021/#DirectiveLocations).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    // Executable
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => DirectiveLocation::Query,
            "MUTATION" => DirectiveLocation::Mutation,
            "SUBSCRIPTION" => DirectiveLocation::Subscription,
            "FIELD" => DirectiveLocation::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            "SCHEMA" => DirectiveLocation::Schema,
            "SCALAR" => DirectiveLocation::Scalar,
            "OBJECT" => DirectiveLocation::Object,
            "FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            "INTERFACE" => DirectiveLocation::Interface,
            "UNION" => DirectiveLocation::Union,
            "ENUM" => DirectiveLocation::Enum,
            "ENUM_VALUE" => DirectiveLocation::EnumValue,
            "INPUT_OBJECT" => DirectiveLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        })
    }

    /// Returns `true` for locations within executable documents.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            DirectiveLocation::Query
                | DirectiveLocation::Mutation
                | DirectiveLocation::Subscription
                | DirectiveLocation::Field
                | DirectiveLocation::FragmentDefinition
                | DirectiveLocation::FragmentSpread
                | DirectiveLocation::InlineFragment
                | DirectiveLocation::VariableDefinition
        )
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
