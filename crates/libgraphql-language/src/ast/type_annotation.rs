use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NodeRef;
use serde::Deserialize;
use serde::Serialize;

/// A type reference: `Name`, `[Type]`, or `Type!`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "AstNode")]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl Type {
    pub fn kind(&self) -> Kind {
        NodeRef::from(self).kind()
    }

    pub fn loc(&self) -> Option<&Location> {
        NodeRef::from(self).loc()
    }

    /// The innermost named type, e.g. `User` for `[User!]!`.
    pub fn innermost_name(&self) -> &Name {
        match self {
            Type::Named(named) => &named.name,
            Type::List(list) => list.type_.innermost_name(),
            Type::NonNull(non_null) => match &non_null.type_ {
                NullableType::Named(named) => &named.name,
                NullableType::List(list) => list.type_.innermost_name(),
            },
        }
    }
}

/// The types a [`NonNullType`] may wrap. Having no `NonNull` variant makes
/// `Type!!` unrepresentable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "AstNode")]
pub enum NullableType {
    Named(NamedType),
    List(ListType),
}

impl From<NullableType> for Type {
    fn from(nullable: NullableType) -> Self {
        match nullable {
            NullableType::Named(named) => Type::Named(named),
            NullableType::List(list) => Type::List(list),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct NamedType {
    pub name: Name,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct ListType {
    #[serde(rename = "type")]
    pub type_: Box<Type>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct NonNullType {
    #[serde(rename = "type")]
    pub type_: NullableType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}
