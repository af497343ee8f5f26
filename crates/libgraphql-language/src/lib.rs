//! The GraphQL language layer: turns GraphQL source text into a syntax tree
//! and back.
//!
//! - [`Lexer`] splits a [`Source`] into [`token::Token`]s.
//! - [`parse()`] and friends build [`ast`] trees, failing with a
//!   [`GraphQLSyntaxError`] that points at the offending line and column.
//! - [`print()`] renders any node as canonical GraphQL text.
//! - [`utilities`] holds the tree-level helpers (operation lookup, document
//!   concatenation, value conversion, canonical ordering).
//!
//! ```
//! use libgraphql_language::ParseOptions;
//! use libgraphql_language::parse;
//! use libgraphql_language::print;
//!
//! let document = parse("query Hero { hero { name } }", ParseOptions::default()).unwrap();
//! assert_eq!(print(&document), "query Hero {\n  hero {\n    name\n  }\n}");
//! ```

pub mod ast;
mod block_string;
mod graphql_error_note;
mod graphql_syntax_error;
mod inspect;
mod lexer;
mod parse_options;
mod parser;
mod predicates;
mod printer;
mod source;
mod source_position;
mod syntax_error_kind;
pub mod token;
pub mod utilities;

pub use block_string::dedent_block_string;
pub use block_string::dedent_block_string_lines;
pub use block_string::print_block_string;
pub use block_string::print_string;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use inspect::inspect;
pub use lexer::Lexer;
pub use parse_options::ParseOptions;
pub use parser::Parser;
pub use parser::parse;
pub use parser::parse_const_value;
pub use parser::parse_type;
pub use parser::parse_value;
pub use predicates::is_const_value_node;
pub use predicates::is_definition_node;
pub use predicates::is_executable_definition_node;
pub use predicates::is_selection_node;
pub use predicates::is_type_definition_node;
pub use predicates::is_type_extension_node;
pub use predicates::is_type_node;
pub use predicates::is_type_system_definition_node;
pub use predicates::is_type_system_extension_node;
pub use predicates::is_value_node;
pub use printer::MAX_LINE_LENGTH;
pub use printer::PrintError;
pub use printer::print;
pub use printer::print_json;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source::DEFAULT_SOURCE_NAME;
pub use source::Source;
pub use source_position::SourcePosition;
pub use syntax_error_kind::SyntaxErrorKind;
pub use utilities::UntypedValue;
pub use utilities::Variables;
pub use utilities::concat_ast;
pub use utilities::get_operation_ast;
pub use utilities::natural_compare;
pub use utilities::sort_value_node;
pub use utilities::value_from_ast_untyped;

#[cfg(test)]
mod tests;
