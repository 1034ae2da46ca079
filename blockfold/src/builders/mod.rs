pub mod numbers;
pub mod strings;

pub use numbers::NumberSequence;
pub use strings::StringJoiner;
