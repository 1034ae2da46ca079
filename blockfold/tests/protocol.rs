use std::sync::atomic::{AtomicUsize, Ordering};

use blockfold::builders::{NumberSequence, StringJoiner};
use blockfold::{
    Arm, ArrayBuilder, Block, BranchBuilder, Builder, ExpressionBuilder, FinalBuilder, PairBuilder,
    Segment, fold, fold_final,
};

fn leaves(words: &[&str]) -> Block<String> {
    Block::new(words.iter().map(|w| Segment::leaf(w.to_string())).collect())
}

#[test]
fn variadic_join_preserves_order() {
    assert_eq!(
        StringJoiner::combine_block(vec!["a".into(), "b".into(), "c".into()]),
        "a, b, c"
    );
    assert_eq!(
        StringJoiner::combine_block(vec!["c".into(), "a".into(), "b".into()]),
        "c, a, b"
    );
}

#[test]
fn variadic_join_empty_and_single() {
    assert_eq!(StringJoiner::combine_block(vec![]), "");
    assert_eq!(StringJoiner::combine_block(vec!["solo".into()]), "solo");
}

#[test]
fn pairwise_matches_variadic_at_arity_two() {
    let pair = StringJoiner::combine_pair("Hola".into(), "mundo".into());
    assert_eq!(pair, "Hola, mundo");
    assert_eq!(
        pair,
        StringJoiner::combine_block(vec!["Hola".into(), "mundo".into()])
    );
}

#[test]
fn array_join_uses_its_own_separator() {
    let run: Vec<String> = (0..=3).map(|i| i.to_string()).collect();
    assert_eq!(StringJoiner::combine_array(run), "0-1-2-3");
    assert_eq!(StringJoiner::combine_array(vec![]), "");
}

#[test]
fn select_branch_returns_value_unchanged() {
    assert_eq!(
        StringJoiner::select_branch(Arm::First, "cruel".into()),
        "cruel"
    );
    assert_eq!(
        StringJoiner::select_branch(Arm::Second, "divertido".into()),
        "divertido"
    );
}

#[test]
fn numeric_combine_flattens_in_order() {
    let groups = vec![vec![1, 2], vec![], vec![3], vec![4, 5]];
    assert_eq!(NumberSequence::combine_array(groups), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        NumberSequence::combine_block(vec![vec![100], vec![200], vec![400]]),
        vec![100, 200, 400]
    );
}

#[test]
fn lift_wraps_a_scalar_into_a_unit_run() {
    assert_eq!(NumberSequence::lift_expression(7), vec![7]);
}

#[test]
fn finalize_is_exact_for_integers() {
    let max_exact = 1i64 << 53;
    let finals = NumberSequence::finalize(vec![0, 1, -1, 100, max_exact]);
    assert_eq!(finals, vec![0.0, 1.0, -1.0, 100.0, 9007199254740992.0]);
}

#[test]
fn fold_of_leaves() {
    assert_eq!(fold::<StringJoiner>(leaves(&["Hola", "mundo"])), "Hola, mundo");
    assert_eq!(
        fold::<StringJoiner>(leaves(&["Hola", "me", "llamo", "Frodo"])),
        "Hola, me, llamo, Frodo"
    );
}

#[test]
fn fold_of_empty_block() {
    assert_eq!(fold::<StringJoiner>(Block::new(vec![])), "");
    assert_eq!(fold::<NumberSequence>(Block::new(vec![])), Vec::<i64>::new());
}

#[test]
fn fold_with_branch_and_loop() {
    let run: Vec<String> = (0..=10).map(|i| i.to_string()).collect();
    let block = Block::new(vec![
        Segment::leaf("Hola".to_string()),
        Segment::leaf("mundo".to_string()),
        Segment::branch(Arm::First, "cruel".to_string()),
        Segment::repeated(run),
    ]);
    assert_eq!(
        fold::<StringJoiner>(block),
        "Hola, mundo, cruel, 0-1-2-3-4-5-6-7-8-9-10"
    );
}

#[test]
fn branch_arm_may_carry_a_loop_run() {
    // A conditional whose chosen arm is itself a loop body: the run is
    // collapsed first, then tagged as that arm's value.
    let inner = StringJoiner::combine_array(vec!["x".into(), "y".into(), "z".into()]);
    let block = Block::new(vec![
        Segment::leaf("start".to_string()),
        Segment::branch(Arm::Second, inner),
    ]);
    assert_eq!(fold::<StringJoiner>(block), "start, x-y-z");
}

#[test]
fn fold_final_publishes_floats() {
    let block = Block::new(vec![
        Segment::leaf(NumberSequence::lift_expression(100)),
        Segment::leaf(NumberSequence::lift_expression(200)),
        Segment::leaf(NumberSequence::lift_expression(400)),
    ]);
    assert_eq!(fold_final::<NumberSequence>(block), vec![100.0, 200.0, 400.0]);
}

#[test]
fn block_reports_top_level_arity() {
    let block = Block::new(vec![
        Segment::leaf("a".to_string()),
        Segment::repeated(vec!["b".to_string(), "c".to_string()]),
    ]);
    // The loop's whole run counts as one segment.
    assert_eq!(block.len(), 2);
    assert!(!block.is_empty());
    assert!(Block::<String>::new(vec![]).is_empty());
}

// Counting builder: same joining policy as StringJoiner, but records
// how often each operation runs so the driver's call discipline is
// observable. All folds happen inside the single test below; the
// statics are not shared across tests.
struct Counting;

static BLOCK_CALLS: AtomicUsize = AtomicUsize::new(0);
static ARRAY_CALLS: AtomicUsize = AtomicUsize::new(0);
static BRANCH_CALLS: AtomicUsize = AtomicUsize::new(0);

impl Builder for Counting {
    type Component = String;
    type Output = String;

    fn combine_block(components: Vec<String>) -> String {
        BLOCK_CALLS.fetch_add(1, Ordering::SeqCst);
        components.join(", ")
    }
}

impl ArrayBuilder for Counting {
    fn combine_array(run: Vec<String>) -> String {
        ARRAY_CALLS.fetch_add(1, Ordering::SeqCst);
        run.join("-")
    }
}

impl BranchBuilder for Counting {
    fn select_branch(arm: Arm, value: String) -> String {
        let _ = arm;
        BRANCH_CALLS.fetch_add(1, Ordering::SeqCst);
        value
    }
}

fn counts() -> (usize, usize, usize) {
    (
        BLOCK_CALLS.load(Ordering::SeqCst),
        ARRAY_CALLS.load(Ordering::SeqCst),
        BRANCH_CALLS.load(Ordering::SeqCst),
    )
}

#[test]
fn driver_call_discipline() {
    // Single segment still goes through combine_block, once.
    fold::<Counting>(Block::new(vec![Segment::leaf("solo".to_string())]));
    assert_eq!(counts(), (1, 0, 0));

    // One branch, one loop run: select_branch and combine_array once
    // each, combine_block exactly once for the whole body.
    let result = fold::<Counting>(Block::new(vec![
        Segment::leaf("a".to_string()),
        Segment::branch(Arm::First, "b".to_string()),
        Segment::repeated(vec!["c".to_string(), "d".to_string()]),
    ]));
    assert_eq!(result, "a, b, c-d");
    assert_eq!(counts(), (2, 1, 1));

    // Empty body: one combine_block call with no components.
    assert_eq!(fold::<Counting>(Block::new(vec![])), "");
    assert_eq!(counts(), (3, 1, 1));

    // Two independent branches mean exactly two select_branch calls.
    fold::<Counting>(Block::new(vec![
        Segment::branch(Arm::First, "x".to_string()),
        Segment::branch(Arm::Second, "y".to_string()),
    ]));
    assert_eq!(counts(), (4, 1, 3));
}
