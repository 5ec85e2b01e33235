//! Syntax analysis: token stream to AST transformation.

mod ast;
mod error;
mod parser;

pub use ast::Expr;
pub use error::{SyntaxError, SyntaxResult};
pub use parser::Parser;

use crate::tokens::{Token, TokenStream};

/// Parse exactly one expression out of `tokens`.
pub fn parse_expression(tokens: Vec<Token>) -> SyntaxResult<Expr> {
    Parser::new(TokenStream::new(tokens)).parse_expression()
}

/// Parse a whole program: zero or more expressions.
pub fn parse_program(tokens: Vec<Token>) -> SyntaxResult<Vec<Expr>> {
    Parser::new(TokenStream::new(tokens)).parse_program()
}
