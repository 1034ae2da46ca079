//! String demonstrations. Each demo comes in two forms that must agree:
//! a declarative form that builds a [`Block`] and runs the fold driver,
//! and a hand-desugared form written as the explicit combinator-call
//! sequence a rewriting pass would emit.

use blockfold::builders::StringJoiner;
use blockfold::{Arm, ArrayBuilder, Block, BranchBuilder, Builder, PairBuilder, Segment, fold};

/// Two leaves: `Hola, mundo`.
pub fn greeting() -> String {
    fold::<StringJoiner>(Block::new(vec![
        Segment::leaf("Hola".to_string()),
        Segment::leaf("mundo".to_string()),
    ]))
}

/// Desugared [`greeting`], written against the historical pairwise
/// policy. It types only because the body has exactly two statements.
pub fn greeting_desugared() -> String {
    let v0 = "Hola".to_string();
    let v1 = "mundo".to_string();
    StringJoiner::combine_pair(v0, v1)
}

/// Four leaves: `Hola, me, llamo, <name>`.
pub fn introduction(name: &str) -> String {
    fold::<StringJoiner>(Block::new(vec![
        Segment::leaf("Hola".to_string()),
        Segment::leaf("me".to_string()),
        Segment::leaf("llamo".to_string()),
        Segment::leaf(name.to_string()),
    ]))
}

pub fn introduction_desugared(name: &str) -> String {
    let v0 = "Hola".to_string();
    let v1 = "me".to_string();
    let v2 = "llamo".to_string();
    let v3 = name.to_string();
    StringJoiner::combine_block(vec![v0, v1, v2, v3])
}

/// An empty body. Only the variadic policy can express this; the
/// pairwise one has no arity-0 form.
pub fn silence() -> String {
    fold::<StringJoiner>(Block::new(vec![]))
}

pub fn silence_desugared() -> String {
    StringJoiner::combine_block(Vec::new())
}

/// Two leaves, a two-way conditional (`cruel` / `divertido`), and a
/// loop over `0..=end`: `Hola, mundo, <mood>, 0-1-...-<end>`. The loop
/// run keeps its own separator inside one top-level component.
pub fn moody_greeting(arm: Arm, end: i64) -> String {
    let mood = match arm {
        Arm::First => "cruel",
        Arm::Second => "divertido",
    };
    let run: Vec<String> = (0..=end).map(|i| i.to_string()).collect();
    fold::<StringJoiner>(Block::new(vec![
        Segment::leaf("Hola".to_string()),
        Segment::leaf("mundo".to_string()),
        Segment::branch(arm, mood.to_string()),
        Segment::repeated(run),
    ]))
}

pub fn moody_greeting_desugared(arm: Arm, end: i64) -> String {
    let v0 = "Hola".to_string();
    let v1 = "mundo".to_string();
    // Exactly one arm is evaluated and tagged.
    let v2 = match arm {
        Arm::First => StringJoiner::select_branch(Arm::First, "cruel".to_string()),
        Arm::Second => StringJoiner::select_branch(Arm::Second, "divertido".to_string()),
    };
    let mut run: Vec<String> = Vec::new();
    for i in 0..=end {
        run.push(i.to_string());
    }
    let v3 = StringJoiner::combine_array(run);
    StringJoiner::combine_block(vec![v0, v1, v2, v3])
}
