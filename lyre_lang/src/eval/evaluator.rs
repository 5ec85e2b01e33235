//! Tree-walking evaluation.
//!
//! Dispatches on the AST variant: numbers are themselves, symbols are
//! looked up, quotations become data, and lists are applications. A
//! special form receives its argument expressions unevaluated together
//! with the environment; everything else is applied to evaluated
//! arguments.

use std::rc::Rc;

use crate::syntax::Expr;

use super::env::Env;
use super::error::EvalError;
use super::value::{Closure, Value};

/// Evaluate `expr` in `env`.
pub fn evaluate(expr: &Expr, env: &Rc<Env>) -> Result<Value, EvalError> {
    match expr {
        Expr::Number(value) => Ok(Value::Number(*value)),
        Expr::Symbol(name) => env
            .lookup(name)
            .ok_or_else(|| EvalError::UndefinedSymbol { name: name.clone() }),
        Expr::Quotation(quoted) => Ok(quote(quoted)),
        Expr::List(elements) => apply(elements, env),
    }
}

/// Convert a quoted expression into the datum it denotes. A quotation
/// nested inside quoted data becomes the two-element list `(quote x)`.
pub fn quote(expr: &Expr) -> Value {
    match expr {
        Expr::Number(value) => Value::Number(*value),
        Expr::Symbol(name) => Value::Symbol(name.clone()),
        Expr::List(elements) => Value::List(elements.iter().map(quote).collect()),
        Expr::Quotation(inner) => Value::List(vec![
            Value::Symbol("quote".to_string()),
            quote(inner),
        ]),
    }
}

fn apply(elements: &[Expr], env: &Rc<Env>) -> Result<Value, EvalError> {
    let Some((head, args)) = elements.split_first() else {
        return Err(EvalError::EmptyApplication);
    };
    let callee = evaluate(head, env)?;
    match callee {
        Value::Form(form) => (form.call)(env, args),
        Value::Builtin(builtin) => {
            let values = evaluate_all(args, env)?;
            (builtin.call)(values)
        }
        Value::Closure(closure) => {
            let values = evaluate_all(args, env)?;
            call_closure(&closure, values)
        }
        other => Err(EvalError::NotCallable {
            value: other.to_string(),
        }),
    }
}

fn evaluate_all(exprs: &[Expr], env: &Rc<Env>) -> Result<Vec<Value>, EvalError> {
    exprs.iter().map(|expr| evaluate(expr, env)).collect()
}

fn call_closure(closure: &Closure, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != closure.params.len() {
        return Err(EvalError::WrongArity {
            callee: "function".to_string(),
            expected: closure.params.len(),
            got: args.len(),
        });
    }
    let scope = Env::child(&closure.env);
    for (param, value) in closure.params.iter().zip(args) {
        scope.define(param.clone(), value);
    }
    evaluate(&closure.body, &scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::eval::builtins;

    fn globals() -> Rc<Env> {
        let env = Env::root();
        builtins::install(&env);
        env
    }

    fn list(elements: Vec<Expr>) -> Expr {
        Expr::List(elements)
    }
    fn sym(name: &str) -> Expr {
        Expr::Symbol(name.to_string())
    }
    fn num(value: i64) -> Expr {
        Expr::Number(value)
    }

    #[test]
    fn numbers_evaluate_to_themselves() {
        let value = evaluate(&num(123), &Env::root()).expect("evaluate");
        assert_eq!(value, Value::Number(123));
    }

    #[test]
    fn symbols_are_looked_up() {
        let env = Env::root();
        env.define("x", Value::Number(7));
        assert_eq!(evaluate(&sym("x"), &env), Ok(Value::Number(7)));
        assert_matches!(
            evaluate(&sym("y"), &env),
            Err(EvalError::UndefinedSymbol { ref name }) if name == "y"
        );
    }

    #[test]
    fn quotations_become_data() {
        let expr = Expr::Quotation(Box::new(list(vec![num(11), num(22), num(33)])));
        assert_eq!(
            evaluate(&expr, &Env::root()),
            Ok(Value::List(vec![
                Value::Number(11),
                Value::Number(22),
                Value::Number(33),
            ]))
        );

        let expr = Expr::Quotation(Box::new(sym("abc")));
        assert_eq!(
            evaluate(&expr, &Env::root()),
            Ok(Value::Symbol("abc".to_string()))
        );
    }

    #[test]
    fn nested_quotation_becomes_a_quote_list() {
        let expr = Expr::Quotation(Box::new(Expr::Quotation(Box::new(sym("x")))));
        assert_eq!(
            evaluate(&expr, &Env::root()),
            Ok(Value::List(vec![
                Value::Symbol("quote".to_string()),
                Value::Symbol("x".to_string()),
            ]))
        );
    }

    #[test]
    fn applications_evaluate_arguments_first() {
        let env = globals();
        // (+ (* (+ 1 1) (+ 2 2) (+ 3 3)) 4 5) = 2 * 4 * 6 + 4 + 5
        let expr = list(vec![
            sym("+"),
            list(vec![
                sym("*"),
                list(vec![sym("+"), num(1), num(1)]),
                list(vec![sym("+"), num(2), num(2)]),
                list(vec![sym("+"), num(3), num(3)]),
            ]),
            num(4),
            num(5),
        ]);
        assert_eq!(evaluate(&expr, &env), Ok(Value::Number(57)));
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        let env = globals();
        // (define square (func (x) (* x x)))
        let define = list(vec![
            sym("define"),
            sym("square"),
            list(vec![
                sym("func"),
                list(vec![sym("x")]),
                list(vec![sym("*"), sym("x"), sym("x")]),
            ]),
        ]);
        assert_eq!(evaluate(&define, &env), Ok(Value::Unit));

        let call = list(vec![sym("square"), num(5)]);
        assert_eq!(evaluate(&call, &env), Ok(Value::Number(25)));

        // The parameter binding does not leak into the globals.
        assert_eq!(env.lookup("x"), None);
    }

    #[test]
    fn closure_arity_is_enforced() {
        let env = globals();
        let define = list(vec![
            sym("define"),
            sym("id"),
            list(vec![sym("func"), list(vec![sym("x")]), sym("x")]),
        ]);
        evaluate(&define, &env).expect("define");

        assert_matches!(
            evaluate(&list(vec![sym("id")]), &env),
            Err(EvalError::WrongArity { expected: 1, got: 0, .. })
        );
        assert_matches!(
            evaluate(&list(vec![sym("id"), num(1), num(2)]), &env),
            Err(EvalError::WrongArity { expected: 1, got: 2, .. })
        );
    }

    #[test]
    fn empty_application_is_an_error() {
        assert_matches!(
            evaluate(&list(Vec::new()), &globals()),
            Err(EvalError::EmptyApplication)
        );
    }

    #[test]
    fn applying_a_number_is_an_error() {
        assert_matches!(
            evaluate(&list(vec![num(1), num(2)]), &globals()),
            Err(EvalError::NotCallable { .. })
        );
    }
}
