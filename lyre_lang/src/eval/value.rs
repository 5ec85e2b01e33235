//! Runtime values.

use std::fmt;
use std::rc::Rc;

use crate::syntax::Expr;

use super::env::Env;
use super::error::EvalError;

/// Signature of a builtin function: fully evaluated arguments in.
pub type BuiltinFn = fn(Vec<Value>) -> Result<Value, EvalError>;

/// Signature of a special form: the environment of the application and
/// the *unevaluated* argument expressions.
pub type FormFn = fn(&Rc<Env>, &[Expr]) -> Result<Value, EvalError>;

/// A named builtin function.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub call: BuiltinFn,
}

/// A named special form: the evaluator's macro escape hatch.
#[derive(Debug, Clone, Copy)]
pub struct SpecialForm {
    pub name: &'static str,
    pub call: FormFn,
}

/// A user function: parameter names, body, and the defining environment.
pub struct Closure {
    pub params: Vec<String>,
    pub body: Expr,
    pub env: Rc<Env>,
}

impl fmt::Debug for Closure {
    // The captured environment may contain this closure; don't chase it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// A Lyre runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Number(i64),
    Boolean(bool),
    /// A symbol as quoted data.
    Symbol(String),
    /// A quoted or constructed list.
    List(Vec<Value>),
    Builtin(Builtin),
    Form(SpecialForm),
    Closure(Rc<Closure>),
    /// The result of expressions evaluated for effect, such as `define`.
    Unit,
}

impl Value {
    /// Falsy values are `false`, `0`, and unit; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(value) => *value,
            Value::Number(value) => *value != 0,
            Value::Unit => false,
            _ => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Builtin(_) => "builtin",
            Value::Form(_) => "special form",
            Value::Closure(_) => "function",
            Value::Unit => "unit",
        }
    }
}

impl PartialEq for Value {
    /// Structural equality for data values; closures compare by identity,
    /// builtins and forms by name.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Form(a), Value::Form(b)) => a.name == b.name,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Unit, Value::Unit) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{value}"),
            Value::Boolean(true) => f.write_str("true"),
            Value::Boolean(false) => f.write_str("false"),
            Value::Symbol(name) => f.write_str(name),
            Value::List(elements) => {
                f.write_str("(")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
            Value::Form(form) => write!(f, "<special form {}>", form.name),
            Value::Closure(_) => f.write_str("<function>"),
            Value::Unit => Ok(()),
        }
    }
}
