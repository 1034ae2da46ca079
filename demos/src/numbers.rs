//! Numeric demonstration: integers are lifted into one-element runs,
//! flattened in order, and published as floating-point values.

use blockfold::builders::NumberSequence;
use blockfold::{Block, Builder, ExpressionBuilder, FinalBuilder, Segment, fold_final};

/// Three integer leaves, finalized: `[100.0, 200.0, 400.0]`.
pub fn measurements() -> Vec<f64> {
    fold_final::<NumberSequence>(Block::new(vec![
        Segment::leaf(NumberSequence::lift_expression(100)),
        Segment::leaf(NumberSequence::lift_expression(200)),
        Segment::leaf(NumberSequence::lift_expression(400)),
    ]))
}

pub fn measurements_desugared() -> Vec<f64> {
    let v0 = NumberSequence::lift_expression(100);
    let v1 = NumberSequence::lift_expression(200);
    let v2 = NumberSequence::lift_expression(400);
    let folded = NumberSequence::combine_block(vec![v0, v1, v2]);
    NumberSequence::finalize(folded)
}
