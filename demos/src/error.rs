use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DemoError {
    UnknownDemo(String),
    UnknownArm(String),
    Io(String),
    Manifest { path: String, message: String },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::UnknownDemo(name) => write!(f, "unknown demo: {}", name),
            DemoError::UnknownArm(arm) => {
                write!(f, "unknown arm '{}': expected 'first' or 'second'", arm)
            }
            DemoError::Io(msg) => write!(f, "I/O error: {}", msg),
            DemoError::Manifest { path, message } => {
                write!(f, "scenario file {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for DemoError {}

impl From<io::Error> for DemoError {
    fn from(err: io::Error) -> Self {
        DemoError::Io(err.to_string())
    }
}
