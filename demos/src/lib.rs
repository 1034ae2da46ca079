pub mod error;
pub mod numbers;
pub mod phrases;
pub mod registry;
pub mod scenario;

pub use error::DemoError;
pub use registry::{DEMO_NAMES, DemoOptions, demo_output, parse_arm, run_demo};
