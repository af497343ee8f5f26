use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationTypeDefinition;
use serde::Deserialize;
use serde::Serialize;

// Each extension must add at least one directive, member, or interface.
// The parser enforces this; the types do not.

/// `extend schema @directives { query: Query ... }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct SchemaExtension {
    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default)]
    pub operation_types: Vec<OperationTypeDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct ScalarTypeExtension {
    pub name: Name,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct ObjectTypeExtension {
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

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct InterfaceTypeExtension {
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

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct UnionTypeExtension {
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
pub struct EnumTypeExtension {
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
pub struct InputObjectTypeExtension {
    pub name: Name,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default)]
    pub fields: Vec<InputValueDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}
