//! Tree-level operations shared by every layer built on the syntax tree.
//!
//! None of these mutate their input: results are fresh trees (or borrows
//! into the input).

mod concat_ast;
mod get_operation_ast;
mod natural_compare;
mod sort_value_node;
mod untyped_value;
mod value_from_ast_untyped;

pub use concat_ast::concat_ast;
pub use get_operation_ast::get_operation_ast;
pub use natural_compare::natural_compare;
pub use sort_value_node::sort_value_node;
pub use untyped_value::UntypedValue;
pub use untyped_value::Variables;
pub use value_from_ast_untyped::value_from_ast_untyped;
