//! The GraphQL syntax tree.
//!
//! Every node kind is an owned struct named after its kind (`Field`,
//! `ObjectTypeDefinition`, ...) with a `loc: Option<Location>` field. The
//! grouping enums [`Definition`], [`Selection`], [`Value`], [`Type`], and
//! [`NullableType`] tie them together.
//!
//! All nodes serialize with serde, each with a leading `"kind"` field
//! holding its [`Kind`] name, so a serialized tree reads like:
//!
//! ```json
//! {"kind": "Document", "definitions": [{"kind": "OperationDefinition", "operation": "query", ...}]}
//! ```
//!
//! Grouping enums serialize as the node they hold and deserialize through
//! [`AstNode`], which dispatches on `"kind"`.

mod document;
mod executable_defs;
mod location;
mod node;
mod shared_nodes;
mod type_annotation;
mod type_extensions;
mod type_system_defs;
mod values;

pub use document::Definition;
pub use document::Document;
pub use executable_defs::Argument;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationType;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use location::Location;
pub use node::AstNode;
pub use node::Kind;
pub use node::Node;
pub use node::NodeRef;
pub use shared_nodes::Directive;
pub use shared_nodes::Name;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::NullableType;
pub use type_annotation::Type;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::DirectiveLocation;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::OperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;
