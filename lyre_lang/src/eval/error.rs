//! Evaluation errors.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined symbol '{name}'")]
    UndefinedSymbol { name: String },

    #[error("'{value}' is not callable")]
    NotCallable { value: String },

    #[error("cannot evaluate an empty list")]
    EmptyApplication,

    #[error("{callee} expects {expected} argument(s), got {got}")]
    WrongArity {
        callee: String,
        expected: usize,
        got: usize,
    },

    #[error("{operation} expects a {expected}, got {found}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("{operation} of empty list")]
    EmptyList { operation: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("numeric overflow in {operation}")]
    NumericOverflow { operation: &'static str },

    #[error("{form} expects a symbol, got '{found}'")]
    ExpectedSymbol {
        form: &'static str,
        found: String,
    },

    #[error("malformed {form} clause, expected a (test expression) pair")]
    MalformedClause { form: &'static str },
}
