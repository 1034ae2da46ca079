use crate::segment::Arm;

/// The core combinator a builder must provide: the variadic block fold.
///
/// `combine_block` receives the complete, order-preserved component
/// sequence for one declarative body — branches already resolved to
/// single values, loop runs already collapsed by [`ArrayBuilder`] — and
/// produces the aggregate result in one call. Any arity is valid,
/// including zero (an empty body folds to the policy's identity).
///
/// All operations in this trait family are associated functions: pure,
/// total over their input domain, and free of shared state, so folds
/// may run repeatedly or concurrently without interference.
pub trait Builder {
    /// The accumulation type components have inside the fold.
    type Component;
    /// The result type of the fold itself (before any [`FinalBuilder`]
    /// conversion).
    type Output;

    fn combine_block(components: Vec<Self::Component>) -> Self::Output;
}

/// The historical arity-2 block policy.
///
/// Callable only with exactly two components; the restriction is in the
/// signature, not a runtime check, so any other arity simply does not
/// compile. [`Builder::combine_block`] subsumes this policy and also
/// covers the empty body, which this one cannot express. Kept as a
/// documented alternative rather than removed.
pub trait PairBuilder: Builder {
    fn combine_pair(first: Self::Component, second: Self::Component) -> Self::Output;
}

/// Lifts a single produced value into the accumulation type.
///
/// Implemented only when ordinary expression statements produce a type
/// different from [`Builder::Component`] (e.g. a scalar lifted into a
/// one-element run). Called once per leaf expression; builders without
/// this trait use leaf values as-is.
pub trait ExpressionBuilder: Builder {
    type Expression;

    fn lift_expression(expr: Self::Expression) -> Self::Component;
}

/// Collapses the output of one loop into a single component.
///
/// The whole run arrives as one argument, not as variadic components:
/// the loop already produced a complete homogeneous sequence. The
/// joining policy may differ from `combine_block`'s, which is what
/// makes a loop's output distinguishable from individually written
/// leaves.
pub trait ArrayBuilder: Builder {
    fn combine_array(run: Vec<Self::Component>) -> Self::Component;
}

/// Tags which arm of a two-way conditional produced a value.
///
/// Exactly one of the two arms is invoked per evaluated conditional,
/// never both. The value passes through unchanged; only the tag
/// differs, so the default body is the full contract.
pub trait BranchBuilder: Builder {
    fn select_branch(arm: Arm, value: Self::Component) -> Self::Component {
        let _ = arm;
        value
    }
}

/// Converts the fold's internal result into the published result type.
///
/// Applied exactly once, after `combine_block`. Implemented only when
/// the two types differ.
pub trait FinalBuilder: Builder {
    type Final;

    fn finalize(output: Self::Output) -> Self::Final;
}
