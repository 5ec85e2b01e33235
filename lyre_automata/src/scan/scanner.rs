//! The longest-match scanner.

use std::sync::Arc;

use crate::state::State;

use super::error::LexicalError;
use super::token_class::{Token, TokenClass};

/// Where the scan of one token committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Acceptance {
    /// Characters consumed by the accepted lexeme.
    chars: usize,
    /// Bytes consumed by the accepted lexeme.
    bytes: usize,
    /// Index of the winning class in the configured order.
    class: usize,
}

/// Drives an ordered set of token classes over input strings.
///
/// The configured order is the priority used to break ties between
/// classes accepting at the same position: earlier wins. The scanner
/// itself is immutable; each scan carries its own working state.
#[derive(Debug, Clone)]
pub struct Scanner {
    classes: Vec<Arc<TokenClass>>,
    discard: Option<String>,
}

impl Scanner {
    pub fn new(classes: Vec<Arc<TokenClass>>) -> Self {
        Self {
            classes,
            discard: None,
        }
    }

    /// Designate the class whose tokens are consumed but never emitted.
    pub fn with_discard(mut self, class_name: impl Into<String>) -> Self {
        self.discard = Some(class_name.into());
        self
    }

    pub fn classes(&self) -> &[Arc<TokenClass>] {
        &self.classes
    }

    /// Simulate every class in parallel from the start of `input` and
    /// return the longest recorded acceptance, if any.
    ///
    /// Acceptance is only ever recorded after at least one character has
    /// been consumed, so a committed token always makes progress even if
    /// some class accepts the empty string. The loop stops as soon as no
    /// branch survives a step; an acceptance recorded earlier stands
    /// regardless of the priority of the class that recorded it.
    fn find_token(&self, input: &str) -> Option<Acceptance> {
        let mut live: Vec<(usize, State)> = self
            .classes
            .iter()
            .enumerate()
            .map(|(index, class)| (index, class.automaton().start_state()))
            .collect();
        let mut best = None;
        let mut bytes = 0;

        for (consumed, ch) in input.chars().enumerate() {
            bytes += ch.len_utf8();
            let mut survivors = Vec::with_capacity(live.len());
            let mut accepted = None;

            for (index, state) in &live {
                if let Some(next) = self.classes[*index].automaton().next(state, ch) {
                    if accepted.is_none() && next.is_final() {
                        accepted = Some(*index);
                    }
                    survivors.push((*index, next));
                }
            }

            if let Some(class) = accepted {
                best = Some(Acceptance {
                    chars: consumed + 1,
                    bytes,
                    class,
                });
            }
            if survivors.is_empty() {
                break;
            }
            live = survivors;
        }

        best
    }

    /// One scanning step: the next emitted token, the input after it, and
    /// how many characters were consumed (discarded tokens included).
    ///
    /// `Ok(None)` means the input is exhausted. The step is stateless, so
    /// scanning can resume from any returned remainder.
    pub fn next_token<'i>(&self, input: &'i str) -> Result<Option<Step<'i>>, LexicalError> {
        let mut rest = input;
        let mut consumed = 0;

        loop {
            if rest.is_empty() {
                return Ok(None);
            }
            let Some(acceptance) = self.find_token(rest) else {
                return Err(LexicalError::unrecognized(consumed, rest));
            };
            let lexeme = &rest[..acceptance.bytes];
            rest = &rest[acceptance.bytes..];
            consumed += acceptance.chars;

            let class = &self.classes[acceptance.class];
            if self.discard.as_deref() == Some(class.name()) {
                continue;
            }
            return Ok(Some(Step {
                token: Token::new(Arc::clone(class), lexeme),
                rest,
                consumed,
            }));
        }
    }

    /// Lazily scan `input` into tokens.
    pub fn scan<'s, 'i>(&'s self, input: &'i str) -> Tokens<'s, 'i> {
        Tokens {
            scanner: self,
            rest: input,
            consumed: 0,
            failed: false,
        }
    }

    /// Scan all of `input`, stopping at the first failure.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, LexicalError> {
        self.scan(input).collect()
    }
}

/// Result of a single [`Scanner::next_token`] step.
#[derive(Debug, Clone)]
pub struct Step<'i> {
    pub token: Token,
    /// Input remaining after the token (and any discarded tokens).
    pub rest: &'i str,
    /// Characters consumed by this step, discarded tokens included.
    pub consumed: usize,
}

/// Lazy, finite, forward-only token sequence. Fused after an error.
#[derive(Debug, Clone)]
pub struct Tokens<'s, 'i> {
    scanner: &'s Scanner,
    rest: &'i str,
    consumed: usize,
    failed: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.scanner.next_token(self.rest) {
            Ok(None) => None,
            Ok(Some(step)) => {
                self.rest = step.rest;
                let base = self.consumed;
                self.consumed = base + step.consumed;
                Some(Ok(step.token))
            }
            Err(error) => {
                self.failed = true;
                Some(Err(error.offset_by(self.consumed)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::automaton::Automaton;
    use crate::builders::{char_range, plus, union_of_chars};

    /// A small parenthesized-word lexicon: open, close, word, whitespace.
    fn scanner() -> Scanner {
        let word = plus(char_range('a', 'z').expect("letter range"));
        let whitespace = Automaton::repetition(union_of_chars(" \t\n").expect("whitespace set"));
        Scanner::new(vec![
            TokenClass::new("open", Automaton::single('(')),
            TokenClass::new("close", Automaton::single(')')),
            TokenClass::new("word", word),
            TokenClass::new("whitespace", whitespace),
        ])
        .with_discard("whitespace")
    }

    fn lexemes(tokens: &[Token]) -> Vec<(&str, &str)> {
        tokens
            .iter()
            .map(|token| (token.class_name(), token.lexeme()))
            .collect()
    }

    #[test]
    fn scans_tokens_in_input_order() {
        let tokens = scanner().tokenize("(ab c)").expect("tokenize");
        assert_eq!(
            lexemes(&tokens),
            vec![("open", "("), ("word", "ab"), ("word", "c"), ("close", ")")]
        );
    }

    #[test]
    fn discards_the_whitespace_class() {
        let tokens = scanner().tokenize("( \t\n)").expect("tokenize");
        assert_eq!(lexemes(&tokens), vec![("open", "("), ("close", ")")]);
    }

    #[test]
    fn empty_input_produces_no_tokens() {
        let tokens = scanner().tokenize("").expect("tokenize");
        assert!(tokens.is_empty());
    }

    #[test]
    fn unrecognized_input_fails_at_position_zero() {
        assert_matches!(
            scanner().tokenize("#"),
            Err(LexicalError::UnrecognizedInput { position: 0, ref remainder }) if remainder == "#"
        );
    }

    #[test]
    fn error_position_counts_discarded_characters() {
        // "((" then a discarded blank, failing on '#' at character 3.
        let error = scanner().tokenize("(( #ab").expect_err("unrecognized input");
        assert_matches!(
            error,
            LexicalError::UnrecognizedInput { position: 3, ref remainder } if remainder == "#ab"
        );
    }

    #[test]
    fn longest_match_beats_priority() {
        // `number` is listed first, but `symbol` stays live and accepting
        // longer on "123abc", so the whole run is one symbol token.
        let digits = char_range('0', '9').expect("digit range");
        let letters = char_range('a', 'z').expect("letter range");
        let number = plus(digits.clone());
        let symbol = plus(Automaton::union(vec![digits, letters]).expect("two branches"));
        let scanner = Scanner::new(vec![
            TokenClass::new("number", number),
            TokenClass::new("symbol", symbol),
        ]);

        let tokens = scanner.tokenize("123abc").expect("tokenize");
        assert_eq!(lexemes(&tokens), vec![("symbol", "123abc")]);
    }

    #[test]
    fn equal_length_ties_go_to_the_first_class() {
        let scanner = Scanner::new(vec![
            TokenClass::new("first", Automaton::single('x')),
            TokenClass::new("second", Automaton::single('x')),
        ]);
        let tokens = scanner.tokenize("xx").expect("tokenize");
        assert_eq!(lexemes(&tokens), vec![("first", "x"), ("first", "x")]);
    }

    #[test]
    fn next_token_reports_the_remainder() {
        let scanner = scanner();
        let step = scanner
            .next_token("ab (")
            .expect("scan")
            .expect("one token");
        assert_eq!(step.token.class_name(), "word");
        assert_eq!(step.token.lexeme(), "ab");
        assert_eq!(step.rest, " (");
        assert_eq!(step.consumed, 2);

        // Resuming from the remainder skips the blank and yields the paren.
        let step = scanner
            .next_token(step.rest)
            .expect("scan")
            .expect("one token");
        assert_eq!(step.token.class_name(), "open");
        assert_eq!(step.consumed, 2);
    }

    #[test]
    fn scanning_is_fused_after_an_error() {
        let scanner = scanner();
        let mut tokens = scanner.scan("a#b");
        assert_matches!(tokens.next(), Some(Ok(_)));
        assert_matches!(tokens.next(), Some(Err(_)));
        assert_matches!(tokens.next(), None);
    }

    #[test]
    fn a_class_accepting_only_empty_never_wins() {
        // `Empty` is final before any input; the scanner must not commit a
        // zero-length token for it, and input it cannot cover still fails.
        let scanner = Scanner::new(vec![
            TokenClass::new("nothing", Automaton::Empty),
            TokenClass::new("x", Automaton::single('x')),
        ]);
        let tokens = scanner.tokenize("xx").expect("tokenize");
        assert_eq!(lexemes(&tokens), vec![("x", "x"), ("x", "x")]);
        assert_matches!(
            scanner.tokenize("y"),
            Err(LexicalError::UnrecognizedInput { position: 0, .. })
        );
    }
}
