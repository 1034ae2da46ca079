use std::io::Write;

use blockfold::Arm;

use crate::error::DemoError;
use crate::{numbers, phrases};

/// All demo names, in presentation order.
pub const DEMO_NAMES: &[&str] = &[
    "greeting",
    "introduction",
    "silence",
    "moody_greeting",
    "measurements",
];

/// Options shared by all demos; each demo reads the ones it needs.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Conditional arm taken where a demo branches.
    pub arm: Arm,
    /// Name used by demos that introduce somebody.
    pub name: String,
    /// Inclusive upper bound for demos that loop.
    pub end: i64,
}

impl Default for DemoOptions {
    fn default() -> Self {
        DemoOptions {
            arm: Arm::First,
            name: "Frodo".to_string(),
            end: 10,
        }
    }
}

pub fn parse_arm(s: &str) -> Option<Arm> {
    match s {
        "first" => Some(Arm::First),
        "second" => Some(Arm::Second),
        _ => None,
    }
}

/// Produce one demo's output in both forms: `(declarative, desugared)`.
/// The two must agree; the scenario runner treats a mismatch as a
/// failure in its own right.
pub fn demo_output(name: &str, opts: &DemoOptions) -> Result<(String, String), DemoError> {
    let pair = match name {
        "greeting" => (phrases::greeting(), phrases::greeting_desugared()),
        "introduction" => (
            phrases::introduction(&opts.name),
            phrases::introduction_desugared(&opts.name),
        ),
        "silence" => (phrases::silence(), phrases::silence_desugared()),
        "moody_greeting" => (
            phrases::moody_greeting(opts.arm, opts.end),
            phrases::moody_greeting_desugared(opts.arm, opts.end),
        ),
        "measurements" => (
            format!("{:?}", numbers::measurements()),
            format!("{:?}", numbers::measurements_desugared()),
        ),
        _ => return Err(DemoError::UnknownDemo(name.to_string())),
    };
    Ok(pair)
}

/// Run one demo, writing its declarative line then its desugared line.
pub fn run_demo(name: &str, opts: &DemoOptions, output: &mut dyn Write) -> Result<(), DemoError> {
    let (declarative, desugared) = demo_output(name, opts)?;
    writeln!(output, "{}", declarative)?;
    writeln!(output, "{}", desugared)?;
    Ok(())
}
