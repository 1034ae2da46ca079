use crate::builder::{ArrayBuilder, BranchBuilder, Builder, ExpressionBuilder, FinalBuilder};

/// Numeric builder: each produced integer is lifted into a one-element
/// run, runs are concatenated in order with no added structure, and the
/// finished accumulation is published as floating-point values.
pub struct NumberSequence;

impl Builder for NumberSequence {
    type Component = Vec<i64>;
    type Output = Vec<i64>;

    fn combine_block(components: Vec<Vec<i64>>) -> Vec<i64> {
        components.into_iter().flatten().collect()
    }
}

impl ExpressionBuilder for NumberSequence {
    type Expression = i64;

    fn lift_expression(expr: i64) -> Vec<i64> {
        vec![expr]
    }
}

impl ArrayBuilder for NumberSequence {
    fn combine_array(run: Vec<Vec<i64>>) -> Vec<i64> {
        run.into_iter().flatten().collect()
    }
}

impl BranchBuilder for NumberSequence {}

impl FinalBuilder for NumberSequence {
    type Final = Vec<f64>;

    // Exact for every i64 a demo produces; f64 holds all integers up to 2^53.
    fn finalize(output: Vec<i64>) -> Vec<f64> {
        output.into_iter().map(|n| n as f64).collect()
    }
}
