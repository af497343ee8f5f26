//! The token types produced by the [`Lexer`](crate::Lexer) and consumed by
//! the parser.

mod token;
mod token_kind;

pub use token::Token;
pub use token::TokenId;
pub use token_kind::TokenKind;
