use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Kind;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeRef;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use serde::Deserialize;
use serde::Serialize;

// =========================================================
// Operations
// =========================================================

/// The kind of an operation (and of a schema root operation type).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// The keyword that introduces this operation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    /// Parses an operation keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationType::Query),
            "mutation" => Some(OperationType::Mutation),
            "subscription" => Some(OperationType::Subscription),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query, mutation, or subscription.
///
/// The shorthand form `{ ... }` parses to an anonymous `query` with no
/// variables or directives, and prints back as the shorthand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,

    #[serde(default)]
    pub variable_definitions: Vec<VariableDefinition>,

    #[serde(default)]
    pub directives: Vec<Directive>,

    pub selection_set: SelectionSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct VariableDefinition {
    pub variable: Variable,

    #[serde(rename = "type")]
    pub type_: Type,

    pub default_value: Option<Value>,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// =========================================================
// Selections
// =========================================================

/// `{ selection... }`. Never empty when parsed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct SelectionSet {
    #[serde(default)]
    pub selections: Vec<Selection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// One entry of a [`SelectionSet`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "AstNode")]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn kind(&self) -> Kind {
        NodeRef::from(self).kind()
    }

    pub fn loc(&self) -> Option<&Location> {
        NodeRef::from(self).loc()
    }
}

/// `alias: name(args) @directives { ... }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,

    #[serde(default)]
    pub arguments: Vec<Argument>,

    #[serde(default)]
    pub directives: Vec<Directive>,

    pub selection_set: Option<SelectionSet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Field {
    /// The key this field's result is reported under: its alias when
    /// present, else its name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).value.as_str()
    }
}

/// `name: value`, as used by fields and directives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct Argument {
    pub name: Name,
    pub value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct FragmentSpread {
    pub name: Name,

    #[serde(default)]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// `... on Type @directives { ... }` (the type condition is optional).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,

    #[serde(default)]
    pub directives: Vec<Directive>,

    pub selection_set: SelectionSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// =========================================================
// Fragments
// =========================================================

/// `fragment Name on Type @directives { ... }`
///
/// `variable_definitions` is only ever non-empty when parsing with
/// [`ParseOptions::allow_legacy_fragment_variables`](crate::ParseOptions::allow_legacy_fragment_variables).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct FragmentDefinition {
    pub name: Name,

    #[serde(default)]
    pub variable_definitions: Vec<VariableDefinition>,

    pub type_condition: NamedType,

    #[serde(default)]
    pub directives: Vec<Directive>,

    pub selection_set: SelectionSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}
