//! AST nodes for Lyre expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed Lyre expression.
///
/// `Display` renders the expression back as source: lists as
/// space-separated elements in parentheses, quotations with a leading
/// apostrophe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Number(i64),
    Symbol(String),
    Quotation(Box<Expr>),
    List(Vec<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Symbol(name) => f.write_str(name),
            Expr::Quotation(inner) => write!(f, "'{inner}"),
            Expr::List(elements) => {
                f.write_str("(")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
        }
    }
}
