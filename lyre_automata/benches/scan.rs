use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lyre_automata::builders::{char_range, plus, union_of_chars};
use lyre_automata::scan::{Scanner, TokenClass};
use lyre_automata::Automaton;

fn scanner() -> Scanner {
    let digits = char_range('0', '9').expect("digit range");
    let letters = char_range('a', 'z').expect("letter range");
    let word = plus(Automaton::union(vec![letters, digits.clone()]).expect("two branches"));
    let number = plus(digits);
    let whitespace = Automaton::repetition(union_of_chars(" \t\n").expect("whitespace set"));

    Scanner::new(vec![
        TokenClass::new("number", number),
        TokenClass::new("word", word),
        TokenClass::new("open", Automaton::single('(')),
        TokenClass::new("close", Automaton::single(')')),
        TokenClass::new("whitespace", whitespace),
    ])
    .with_discard("whitespace")
}

fn bench_tokenize(c: &mut Criterion) {
    let scanner = scanner();
    let input = "(add 123 (mul 456 789) (zip abc xyz))\n".repeat(64);

    c.bench_function("tokenize", |b| {
        b.iter(|| scanner.tokenize(black_box(&input)).expect("clean input"))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
