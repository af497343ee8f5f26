use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NodeRef;
use serde::Deserialize;
use serde::Serialize;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value literal.
///
/// Int and Float literals keep their source text; converting them to
/// numbers is left to consumers (see
/// [`value_from_ast_untyped()`](crate::value_from_ast_untyped)).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "AstNode")]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    pub fn kind(&self) -> Kind {
        NodeRef::from(self).kind()
    }

    pub fn loc(&self) -> Option<&Location> {
        NodeRef::from(self).loc()
    }
}

// =========================================================
// Scalar values
// =========================================================

/// `$name`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct Variable {
    pub name: Name,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// An integer literal, as written (e.g. `-42`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct IntValue {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A float literal, as written (e.g. `1.5e10`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct FloatValue {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A string literal. `value` is the processed content (escapes resolved,
/// block strings dedented); `block` records whether it was written as a
/// `"""` block string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct StringValue {
    pub value: String,

    #[serde(default)]
    pub block: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct BooleanValue {
    pub value: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct NullValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// An enum literal: any name other than `true`, `false`, or `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct EnumValue {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// =========================================================
// Compound values
// =========================================================

/// `[value, ...]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct ListValue {
    #[serde(default)]
    pub values: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// `{name: value, ...}`
///
/// Fields keep source order and field names are not required to be
/// unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct ObjectValue {
    #[serde(default)]
    pub fields: Vec<ObjectField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}
