use crate::builder::{ArrayBuilder, BranchBuilder, FinalBuilder};
use crate::segment::{Block, Segment};

/// Fold a finished block with builder `B`.
///
/// Segments are resolved in program order — leaves pass through,
/// each branch goes through `select_branch` exactly once, each loop run
/// through `combine_array` exactly once — and the complete component
/// sequence is handed to `combine_block` in a single call. A block with
/// one segment (or none) takes the same path as any other; there is no
/// shortcut around `combine_block`.
pub fn fold<B>(block: Block<B::Component>) -> B::Output
where
    B: ArrayBuilder + BranchBuilder,
{
    let components = block
        .into_segments()
        .into_iter()
        .map(|segment| match segment {
            Segment::Leaf(value) => value,
            Segment::Branch { arm, value } => B::select_branch(arm, value),
            Segment::Repeated(run) => B::combine_array(run),
        })
        .collect();
    B::combine_block(components)
}

/// Fold a block and convert the result to the published type.
/// `finalize` runs exactly once, after `combine_block`.
pub fn fold_final<B>(block: Block<B::Component>) -> B::Final
where
    B: ArrayBuilder + BranchBuilder + FinalBuilder,
{
    B::finalize(fold::<B>(block))
}
