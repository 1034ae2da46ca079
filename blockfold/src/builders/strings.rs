use crate::builder::{ArrayBuilder, BranchBuilder, Builder, PairBuilder};

/// Separator between top-level components of a body.
pub const BLOCK_SEPARATOR: &str = ", ";
/// Separator inside a loop's run, deliberately different from the
/// block-level one so loop output reads as a single unit.
pub const ARRAY_SEPARATOR: &str = "-";

/// String builder: joins components with `", "` at block level and
/// `"-"` inside loop runs. An empty body folds to the empty string; a
/// single component passes through unchanged.
pub struct StringJoiner;

impl Builder for StringJoiner {
    type Component = String;
    type Output = String;

    fn combine_block(components: Vec<String>) -> String {
        components.join(BLOCK_SEPARATOR)
    }
}

impl PairBuilder for StringJoiner {
    fn combine_pair(first: String, second: String) -> String {
        format!("{}{}{}", first, BLOCK_SEPARATOR, second)
    }
}

impl ArrayBuilder for StringJoiner {
    fn combine_array(run: Vec<String>) -> String {
        run.join(ARRAY_SEPARATOR)
    }
}

impl BranchBuilder for StringJoiner {}
