pub mod builder;
pub mod builders;
pub mod fold;
pub mod segment;

pub use builder::{
    ArrayBuilder, BranchBuilder, Builder, ExpressionBuilder, FinalBuilder, PairBuilder,
};
pub use fold::{fold, fold_final};
pub use segment::{Arm, Block, Segment};
