//! End-to-end interpretation pipeline: scan, parse, evaluate.

use std::rc::Rc;

use log::{debug, trace};

use lyre_automata::ConfigurationError;

use crate::config::runtime::PipelinePreferences;
use crate::eval::{self, Env, EvalError, Value};
use crate::lexical::{LexerError, Lexicon};
use crate::syntax::{self, Expr, SyntaxError};
use crate::tokens::Token;

/// Errors from any stage of the pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexerError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// The Lyre interpreter: the standard lexicon plus a global environment
/// with the builtin library installed.
///
/// Construction fails only if the lexicon's automata are misconfigured,
/// which indicates a bug in the grammar definition itself.
#[derive(Debug)]
pub struct Interpreter {
    lexicon: Lexicon,
    globals: Rc<Env>,
    preferences: PipelinePreferences,
}

impl Interpreter {
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::with_preferences(PipelinePreferences::default())
    }

    pub fn with_preferences(
        preferences: PipelinePreferences,
    ) -> Result<Self, ConfigurationError> {
        let lexicon = Lexicon::standard()?;
        let globals = Env::root();
        eval::builtins::install(&globals);
        Ok(Self {
            lexicon,
            globals,
            preferences,
        })
    }

    /// The global environment. Definitions accumulate here across calls,
    /// which is what makes a REPL session stateful.
    pub fn globals(&self) -> &Rc<Env> {
        &self.globals
    }

    /// Tokenize `source` with the standard lexicon.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, PipelineError> {
        let tokens = self.lexicon.tokenize(source)?;
        if self.preferences.trace_tokens {
            for token in &tokens {
                trace!("token {} '{}'", token.kind(), token.text());
            }
        }
        if self.preferences.log_stage_summaries {
            debug!("scan: {} tokens", tokens.len());
        }
        Ok(tokens)
    }

    /// Parse one expression out of `source`.
    pub fn parse(&self, source: &str) -> Result<Expr, PipelineError> {
        let tokens = self.tokenize(source)?;
        let expr = syntax::parse_expression(tokens)?;
        if self.preferences.log_stage_summaries {
            debug!("parse: {expr}");
        }
        Ok(expr)
    }

    /// Parse `source` as a program of zero or more expressions.
    pub fn parse_program(&self, source: &str) -> Result<Vec<Expr>, PipelineError> {
        let tokens = self.tokenize(source)?;
        let program = syntax::parse_program(tokens)?;
        if self.preferences.log_stage_summaries {
            debug!("parse: {} top-level expressions", program.len());
        }
        Ok(program)
    }

    /// Interpret a single expression.
    pub fn interpret(&self, source: &str) -> Result<Value, PipelineError> {
        let expr = self.parse(source)?;
        let value = eval::evaluate(&expr, &self.globals)?;
        Ok(value)
    }

    /// Interpret a program; the value of the last expression is the
    /// result, unit if the program is empty.
    pub fn interpret_program(&self, source: &str) -> Result<Value, PipelineError> {
        let mut last = Value::Unit;
        for expr in self.parse_program(source)? {
            last = eval::evaluate(&expr, &self.globals)?;
        }
        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use lyre_automata::scan::LexicalError;

    fn interpreter() -> Interpreter {
        Interpreter::new().expect("standard lexicon")
    }

    fn eval(source: &str) -> Value {
        interpreter().interpret(source).expect("interpret")
    }

    #[test]
    fn eq() {
        assert_eq!(eval("(eq? 1 1)"), Value::Boolean(true));
        assert_eq!(eval("(eq? 1 2)"), Value::Boolean(false));
        assert_eq!(eval("(eq? (+ 1 1) 2)"), Value::Boolean(true));
    }

    #[test]
    fn cons() {
        assert_eq!(eval("(cons 1 '())"), Value::List(vec![Value::Number(1)]));
        assert_eq!(
            eval("(cons 1 (cons 2 '()))"),
            Value::List(vec![Value::Number(1), Value::Number(2)])
        );
    }

    #[test]
    fn car_and_cdr() {
        assert_eq!(eval("(car '(1))"), Value::Number(1));
        assert_eq!(eval("(car '(1 2))"), Value::Number(1));
        assert_eq!(eval("(cdr '(1))"), Value::List(Vec::new()));
        assert_eq!(
            eval("(cdr '(1 2 3))"),
            Value::List(vec![Value::Number(2), Value::Number(3)])
        );
    }

    #[test]
    fn atom() {
        assert_eq!(eval("(atom? 1)"), Value::Boolean(true));
        assert_eq!(eval("(atom? x)"), Value::Boolean(true));
        assert_eq!(eval("(atom? (1 2))"), Value::Boolean(false));
        assert_eq!(eval("(atom? '1)"), Value::Boolean(false));
        assert_eq!(eval("(atom? 'x)"), Value::Boolean(false));
        assert_eq!(eval("(atom? '(1 2))"), Value::Boolean(false));
    }

    #[test]
    fn define_is_visible_in_later_expressions() {
        let interpreter = interpreter();
        assert_eq!(
            interpreter.interpret("(define x 1)"),
            Ok(Value::Unit)
        );
        assert_eq!(interpreter.interpret("x"), Ok(Value::Number(1)));
    }

    #[test]
    fn func_defines_callable_functions() {
        let interpreter = interpreter();
        interpreter
            .interpret("(define square (func (x) (* x x)))")
            .expect("define");
        assert_eq!(interpreter.interpret("(square 5)"), Ok(Value::Number(25)));
    }

    #[test]
    fn cond_picks_the_first_truthy_clause() {
        assert_eq!(
            eval("(cond ((eq? 1 1) 1) (default 2))"),
            Value::Number(1)
        );
        assert_eq!(
            eval("(cond ((eq? 1 2) 1) (default 2))"),
            Value::Number(2)
        );
        assert_eq!(
            eval("(cond ((eq? 1 2) 1) ((eq? 1 3) 2) (default 3))"),
            Value::Number(3)
        );
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval("(+)"), Value::Number(0));
        assert_eq!(eval("(+ 1)"), Value::Number(1));
        assert_eq!(eval("(+ 1 2)"), Value::Number(3));
        assert_eq!(eval("(+ 1 2 3)"), Value::Number(6));

        assert_eq!(eval("(- 2 1)"), Value::Number(1));
        assert_eq!(eval("(- 6 4)"), Value::Number(2));

        assert_eq!(eval("(*)"), Value::Number(1));
        assert_eq!(eval("(* 1 2 3)"), Value::Number(6));

        assert_eq!(eval("(/ 6 3)"), Value::Number(2));
    }

    #[test]
    fn stage_errors_surface_with_their_kind() {
        let interpreter = interpreter();
        assert_matches!(
            interpreter.interpret("(eq? 1 #)"),
            Err(PipelineError::Lexical(LexerError::Scan(
                LexicalError::UnrecognizedInput { position: 7, .. }
            )))
        );
        assert_matches!(
            interpreter.interpret("(+ 1 1"),
            Err(PipelineError::Syntax(SyntaxError::UnmatchedOpenParenthesis))
        );
        assert_matches!(
            interpreter.interpret("unbound"),
            Err(PipelineError::Eval(EvalError::UndefinedSymbol { .. }))
        );
    }

    #[test]
    fn interpret_program_runs_in_sequence() {
        let interpreter = interpreter();
        let value = interpreter
            .interpret_program("(define x 2)\n(define y 3)\n(* x y)")
            .expect("interpret");
        assert_eq!(value, Value::Number(6));
        assert_eq!(interpreter.interpret_program(""), Ok(Value::Unit));
    }
}
