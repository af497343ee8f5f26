use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::Kind;
use crate::ast::Location;
use crate::ast::NodeRef;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use serde::Deserialize;
use serde::Serialize;

/// The root of a parsed GraphQL document.
///
/// `definitions` keeps source order. A document may freely mix executable
/// and type-system definitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub struct Document {
    #[serde(default)]
    pub definitions: Vec<Definition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Document {
    /// Iterates the operation definitions, in source order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::OperationDefinition(op) => Some(op),
            _ => None,
        })
    }

    /// Iterates the fragment definitions, in source order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::FragmentDefinition(frag) => Some(frag),
            _ => None,
        })
    }
}

/// A top-level definition in a [`Document`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "AstNode")]
pub enum Definition {
    // Executable
    OperationDefinition(OperationDefinition),
    FragmentDefinition(FragmentDefinition),

    // Type system
    SchemaDefinition(SchemaDefinition),
    ScalarTypeDefinition(ScalarTypeDefinition),
    ObjectTypeDefinition(ObjectTypeDefinition),
    InterfaceTypeDefinition(InterfaceTypeDefinition),
    UnionTypeDefinition(UnionTypeDefinition),
    EnumTypeDefinition(EnumTypeDefinition),
    InputObjectTypeDefinition(InputObjectTypeDefinition),
    DirectiveDefinition(DirectiveDefinition),

    // Type system extensions
    SchemaExtension(SchemaExtension),
    ScalarTypeExtension(ScalarTypeExtension),
    ObjectTypeExtension(ObjectTypeExtension),
    InterfaceTypeExtension(InterfaceTypeExtension),
    UnionTypeExtension(UnionTypeExtension),
    EnumTypeExtension(EnumTypeExtension),
    InputObjectTypeExtension(InputObjectTypeExtension),
}

impl Definition {
    pub fn kind(&self) -> Kind {
        NodeRef::from(self).kind()
    }

    pub fn loc(&self) -> Option<&Location> {
        NodeRef::from(self).loc()
    }
}
