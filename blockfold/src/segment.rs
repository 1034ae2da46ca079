/// Which arm of a two-way conditional produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arm {
    First,
    Second,
}

/// One statement-like unit produced by a declarative body.
/// Segments appear in the order the body produced them; folding is
/// order-preserving end to end.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<T> {
    /// A single produced value (a literal or a computed expression).
    Leaf(T),
    /// The resolved result of a two-way conditional. Exactly one arm is
    /// evaluated and its value recorded here with the winning tag; the
    /// other arm's value never exists.
    Branch {
        arm: Arm,
        value: T,
    },
    /// The homogeneous output of one loop, kept whole so the array
    /// policy can join it separately from individually written leaves.
    Repeated(Vec<T>),
}

impl<T> Segment<T> {
    pub fn leaf(value: T) -> Self {
        Segment::Leaf(value)
    }

    pub fn branch(arm: Arm, value: T) -> Self {
        Segment::Branch { arm, value }
    }

    pub fn repeated(values: Vec<T>) -> Self {
        Segment::Repeated(values)
    }
}

/// The ordered segment sequence produced by one declarative body.
///
/// A block is constructed once, in program order, and consumed whole by
/// a single fold. It is never mutated after construction and never
/// partially folded.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<T> {
    segments: Vec<Segment<T>>,
}

impl<T> Block<T> {
    pub fn new(segments: Vec<Segment<T>>) -> Self {
        Block { segments }
    }

    /// Number of top-level segments (a loop's output counts as one).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn into_segments(self) -> Vec<Segment<T>> {
        self.segments
    }
}

impl<T> From<Vec<Segment<T>>> for Block<T> {
    fn from(segments: Vec<Segment<T>>) -> Self {
        Block::new(segments)
    }
}
