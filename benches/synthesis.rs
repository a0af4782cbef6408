use criterion::{black_box, criterion_group, criterion_main, Criterion};

use matchrule::{decode, synthesize, Operator, TermSequence, Token};

const RULE: &str = "correct_response(A) :- term(A,tom), template(A,maud); term(A,sue), \
                    not term(A,bob), closely_precedes(A,B,C).";

fn grouped_sequence() -> TermSequence {
    let mut seq = TermSequence::new();
    let a = seq.push_word(Operator::And, Token::new("a").unwrap());
    seq.push_word(Operator::Or, Token::new("b").unwrap());
    seq.push_word(Operator::And, Token::new("c").unwrap());
    let d = seq.push_template(Operator::And, Token::template("d").unwrap());
    seq.push_word(Operator::Or, Token::new("e").unwrap());
    seq.push_precedes(a, d);
    seq
}

fn bench_synthesis(c: &mut Criterion) {
    let seq = grouped_sequence();
    c.bench_function("synthesize_two_groups", |b| {
        b.iter(|| synthesize(black_box(&seq)).unwrap());
    });

    c.bench_function("decode_rule", |b| {
        b.iter(|| decode(black_box(RULE)).unwrap());
    });

    c.bench_function("decode_and_synthesize", |b| {
        b.iter(|| synthesize(&decode(black_box(RULE)).unwrap()).unwrap());
    });
}

criterion_group!(benches, bench_synthesis);
criterion_main!(benches);
