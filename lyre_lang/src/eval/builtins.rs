//! The builtin library: functions, special forms, and standard bindings.

use std::rc::Rc;

use crate::syntax::Expr;

use super::env::Env;
use super::error::EvalError;
use super::evaluator::evaluate;
use super::value::{Builtin, Closure, SpecialForm, Value};

/// Install the standard bindings into `env`.
pub fn install(env: &Rc<Env>) {
    for builtin in [
        Builtin { name: "eq?", call: eq },
        Builtin { name: "cons", call: cons },
        Builtin { name: "car", call: car },
        Builtin { name: "cdr", call: cdr },
        Builtin { name: "+", call: add },
        Builtin { name: "-", call: minus },
        Builtin { name: "*", call: mult },
        Builtin { name: "/", call: div },
    ] {
        env.define(builtin.name, Value::Builtin(builtin));
    }

    for form in [
        SpecialForm { name: "atom?", call: atom },
        SpecialForm { name: "define", call: define },
        SpecialForm { name: "func", call: func },
        SpecialForm { name: "cond", call: cond },
    ] {
        env.define(form.name, Value::Form(form));
    }

    env.define("default", Value::Boolean(true));
}

fn one(callee: &'static str, args: Vec<Value>) -> Result<Value, EvalError> {
    match <[Value; 1]>::try_from(args) {
        Ok([value]) => Ok(value),
        Err(args) => Err(EvalError::WrongArity {
            callee: callee.to_string(),
            expected: 1,
            got: args.len(),
        }),
    }
}

fn two(callee: &'static str, args: Vec<Value>) -> Result<(Value, Value), EvalError> {
    match <[Value; 2]>::try_from(args) {
        Ok([first, second]) => Ok((first, second)),
        Err(args) => Err(EvalError::WrongArity {
            callee: callee.to_string(),
            expected: 2,
            got: args.len(),
        }),
    }
}

fn number(operation: &'static str, value: Value) -> Result<i64, EvalError> {
    match value {
        Value::Number(value) => Ok(value),
        other => Err(EvalError::TypeMismatch {
            operation,
            expected: "number",
            found: other.type_name().to_string(),
        }),
    }
}

fn elements(operation: &'static str, value: Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::List(elements) => Ok(elements),
        other => Err(EvalError::TypeMismatch {
            operation,
            expected: "list",
            found: other.type_name().to_string(),
        }),
    }
}

// === Builtin functions ===

fn eq(args: Vec<Value>) -> Result<Value, EvalError> {
    let (a, b) = two("eq?", args)?;
    Ok(Value::Boolean(a == b))
}

fn cons(args: Vec<Value>) -> Result<Value, EvalError> {
    let (head, tail) = two("cons", args)?;
    let mut elements = elements("cons", tail)?;
    elements.insert(0, head);
    Ok(Value::List(elements))
}

fn car(args: Vec<Value>) -> Result<Value, EvalError> {
    let list = elements("car", one("car", args)?)?;
    list.into_iter()
        .next()
        .ok_or(EvalError::EmptyList { operation: "car" })
}

fn cdr(args: Vec<Value>) -> Result<Value, EvalError> {
    let list = elements("cdr", one("cdr", args)?)?;
    Ok(Value::List(list.into_iter().skip(1).collect()))
}

fn add(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut sum: i64 = 0;
    for value in args {
        sum = sum
            .checked_add(number("+", value)?)
            .ok_or(EvalError::NumericOverflow { operation: "+" })?;
    }
    Ok(Value::Number(sum))
}

fn minus(args: Vec<Value>) -> Result<Value, EvalError> {
    let (a, b) = two("-", args)?;
    number("-", a)?
        .checked_sub(number("-", b)?)
        .map(Value::Number)
        .ok_or(EvalError::NumericOverflow { operation: "-" })
}

fn mult(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut product: i64 = 1;
    for value in args {
        product = product
            .checked_mul(number("*", value)?)
            .ok_or(EvalError::NumericOverflow { operation: "*" })?;
    }
    Ok(Value::Number(product))
}

fn div(args: Vec<Value>) -> Result<Value, EvalError> {
    let (a, b) = two("/", args)?;
    let divisor = number("/", b)?;
    if divisor == 0 {
        return Err(EvalError::DivisionByZero);
    }
    number("/", a)?
        .checked_div(divisor)
        .map(Value::Number)
        .ok_or(EvalError::NumericOverflow { operation: "/" })
}

// === Special forms ===

/// `(atom? expr)` — whether the unevaluated argument is a number or
/// symbol. Quotations and lists are not atoms.
fn atom(_env: &Rc<Env>, args: &[Expr]) -> Result<Value, EvalError> {
    match args {
        [expr] => Ok(Value::Boolean(matches!(
            expr,
            Expr::Number(_) | Expr::Symbol(_)
        ))),
        _ => Err(EvalError::WrongArity {
            callee: "atom?".to_string(),
            expected: 1,
            got: args.len(),
        }),
    }
}

/// `(define name expr)` — bind `name` to the value of `expr` in the
/// current scope.
fn define(env: &Rc<Env>, args: &[Expr]) -> Result<Value, EvalError> {
    match args {
        [Expr::Symbol(name), expr] => {
            let value = evaluate(expr, env)?;
            env.define(name.clone(), value);
            Ok(Value::Unit)
        }
        [other, _] => Err(EvalError::ExpectedSymbol {
            form: "define",
            found: other.to_string(),
        }),
        _ => Err(EvalError::WrongArity {
            callee: "define".to_string(),
            expected: 2,
            got: args.len(),
        }),
    }
}

/// `(func (params...) body)` — a lexical closure over the current
/// environment.
fn func(env: &Rc<Env>, args: &[Expr]) -> Result<Value, EvalError> {
    match args {
        [Expr::List(params), body] => {
            let mut names = Vec::with_capacity(params.len());
            for param in params {
                match param {
                    Expr::Symbol(name) => names.push(name.clone()),
                    other => {
                        return Err(EvalError::ExpectedSymbol {
                            form: "func",
                            found: other.to_string(),
                        })
                    }
                }
            }
            Ok(Value::Closure(Rc::new(Closure {
                params: names,
                body: body.clone(),
                env: Rc::clone(env),
            })))
        }
        [other, _] => Err(EvalError::TypeMismatch {
            operation: "func",
            expected: "parameter list",
            found: other.to_string(),
        }),
        _ => Err(EvalError::WrongArity {
            callee: "func".to_string(),
            expected: 2,
            got: args.len(),
        }),
    }
}

/// `(cond (test expr)...)` — the first clause whose test is truthy
/// decides the value; no match yields unit.
fn cond(env: &Rc<Env>, args: &[Expr]) -> Result<Value, EvalError> {
    for clause in args {
        let Expr::List(pair) = clause else {
            return Err(EvalError::MalformedClause { form: "cond" });
        };
        let [test, result] = &pair[..] else {
            return Err(EvalError::MalformedClause { form: "cond" });
        };
        if evaluate(test, env)?.is_truthy() {
            return evaluate(result, env);
        }
    }
    Ok(Value::Unit)
}
