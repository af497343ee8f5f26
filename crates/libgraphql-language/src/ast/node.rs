//! The closed set of node kinds, and kind-agnostic views over nodes.

use crate::ast::*;
use crate::inspect;
use inherent::inherent;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::Error as _;

/// Implemented by every AST node struct via `#[inherent]`, so `kind()` and
/// `loc()` are callable without importing the trait.
pub trait Node {
    /// The node's kind tag.
    fn kind(&self) -> Kind;

    /// The node's source location, or `None` for nodes parsed with
    /// [`ParseOptions::no_location`](crate::ParseOptions::no_location) or
    /// synthesized by a utility.
    fn loc(&self) -> Option<&Location>;
}

macro_rules! ast_kinds {
    ($($kind:ident),* $(,)?) => {
        /// The kind tag of an AST node. The string form (see
        /// [`Kind::as_str()`]) is the `"kind"` field of the serialized tree.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Kind {
            $($kind,)*
        }

        impl Kind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [Kind] = &[$(Kind::$kind,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Kind::$kind => stringify!($kind),)*
                }
            }

            /// Looks up a kind by its string form. Returns `None` for any
            /// unrecognized name.
            pub fn from_name(name: &str) -> Option<Kind> {
                match name {
                    $(stringify!($kind) => Some(Kind::$kind),)*
                    _ => None,
                }
            }
        }

        /// A borrowed reference to a node of any kind.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum NodeRef<'a> {
            $($kind(&'a $kind),)*
        }

        impl<'a> NodeRef<'a> {
            pub fn kind(&self) -> Kind {
                match self {
                    $(NodeRef::$kind(_) => Kind::$kind,)*
                }
            }

            pub fn loc(&self) -> Option<&'a Location> {
                match self {
                    $(NodeRef::$kind(node) => node.loc.as_ref(),)*
                }
            }
        }

        /// An owned node of any kind.
        ///
        /// This is what a serialized tree of unknown kind deserializes to
        /// (see [`AstNode::from_json()`]). It serializes as the node itself.
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum AstNode {
            $($kind($kind),)*
        }

        impl AstNode {
            pub fn kind(&self) -> Kind {
                self.as_node_ref().kind()
            }

            pub fn as_node_ref(&self) -> NodeRef<'_> {
                match self {
                    $(AstNode::$kind(node) => NodeRef::$kind(node),)*
                }
            }

            /// Deserializes `value` as a node of the given kind.
            pub fn deserialize_as(
                kind: Kind,
                value: serde_json::Value,
            ) -> Result<AstNode, serde_json::Error> {
                match kind {
                    $(Kind::$kind => {
                        serde_json::from_value::<$kind>(value).map(AstNode::$kind)
                    },)*
                }
            }
        }

        $(
            impl<'a> From<&'a $kind> for NodeRef<'a> {
                fn from(node: &'a $kind) -> Self {
                    NodeRef::$kind(node)
                }
            }

            impl From<$kind> for AstNode {
                fn from(node: $kind) -> Self {
                    AstNode::$kind(node)
                }
            }

            #[inherent]
            impl Node for $kind {
                pub fn kind(&self) -> Kind {
                    Kind::$kind
                }

                pub fn loc(&self) -> Option<&Location> {
                    self.loc.as_ref()
                }
            }
        )*
    };
}

ast_kinds! {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
}

impl AstNode {
    /// Rehydrates a node from its serialized form, dispatching on the
    /// `"kind"` field.
    ///
    /// Returns `Ok(None)` when `value` has no string `"kind"` field or the
    /// kind is not recognized; `Err` when the kind is recognized but the
    /// shape does not match it.
    pub fn from_json(value: &serde_json::Value) -> Result<Option<AstNode>, serde_json::Error> {
        match serialized_kind(value) {
            Some(kind) => AstNode::deserialize_as(kind, value.clone()).map(Some),
            None => Ok(None),
        }
    }
}

fn serialized_kind(value: &serde_json::Value) -> Option<Kind> {
    value
        .get("kind")
        .and_then(serde_json::Value::as_str)
        .and_then(Kind::from_name)
}

impl<'de> Deserialize<'de> for AstNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let Some(kind) = serialized_kind(&value) else {
            return Err(D::Error::custom(format!(
                "missing or unrecognized node kind in {}",
                inspect(&value),
            )));
        };
        AstNode::deserialize_as(kind, value).map_err(D::Error::custom)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> From<&'a AstNode> for NodeRef<'a> {
    fn from(node: &'a AstNode) -> Self {
        node.as_node_ref()
    }
}

// =========================================================
// Grouping enums
// =========================================================

/// Ties a grouping enum to the node kinds it holds: borrowing as a
/// [`NodeRef`], and narrowing an [`AstNode`] (which is how the grouping
/// enums deserialize).
macro_rules! node_group {
    ($group:ident, $expected:literal { $($variant:ident($kind:ident)),* $(,)? }) => {
        impl<'a> From<&'a $group> for NodeRef<'a> {
            fn from(node: &'a $group) -> Self {
                match node {
                    $($group::$variant(node) => NodeRef::$kind(node),)*
                }
            }
        }

        impl TryFrom<AstNode> for $group {
            type Error = String;

            fn try_from(node: AstNode) -> Result<Self, Self::Error> {
                match node {
                    $(AstNode::$kind(node) => Ok($group::$variant(node)),)*
                    other => Err(format!("expected {}, found {}", $expected, other.kind())),
                }
            }
        }
    };
}

node_group!(Definition, "a definition" {
    OperationDefinition(OperationDefinition),
    FragmentDefinition(FragmentDefinition),
    SchemaDefinition(SchemaDefinition),
    ScalarTypeDefinition(ScalarTypeDefinition),
    ObjectTypeDefinition(ObjectTypeDefinition),
    InterfaceTypeDefinition(InterfaceTypeDefinition),
    UnionTypeDefinition(UnionTypeDefinition),
    EnumTypeDefinition(EnumTypeDefinition),
    InputObjectTypeDefinition(InputObjectTypeDefinition),
    DirectiveDefinition(DirectiveDefinition),
    SchemaExtension(SchemaExtension),
    ScalarTypeExtension(ScalarTypeExtension),
    ObjectTypeExtension(ObjectTypeExtension),
    InterfaceTypeExtension(InterfaceTypeExtension),
    UnionTypeExtension(UnionTypeExtension),
    EnumTypeExtension(EnumTypeExtension),
    InputObjectTypeExtension(InputObjectTypeExtension),
});

node_group!(Selection, "a selection" {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
});

node_group!(Value, "a value" {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
});

node_group!(Type, "a type" {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
});

node_group!(NullableType, "a nullable type" {
    Named(NamedType),
    List(ListType),
});
