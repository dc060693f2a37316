use std::fmt;
use std::io;

use crate::interpreter::ScriptError;

#[derive(Debug)]
pub enum DriverError {
    ReadFailed { source: String, error: io::Error },
    Script { source: String, script: String, error: ScriptError },
}

impl DriverError {
    pub fn render(&self) -> String {
        match self {
            DriverError::ReadFailed { source, error } => {
                format!("unable to read {}: {}", source, error)
            }
            DriverError::Script { source, script, error } => {
                format!("{}: {}", source, error.render(script))
            }
        }
    }

    pub fn script_error(&self) -> Option<&ScriptError> {
        match self {
            DriverError::Script { error, .. } => Some(error),
            DriverError::ReadFailed { .. } => None,
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::ReadFailed { source, error } => {
                write!(f, "unable to read {}: {}", source, error)
            }
            DriverError::Script { source, error, .. } => write!(f, "{}: {}", source, error),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::ReadFailed { error, .. } => Some(error),
            DriverError::Script { error, .. } => Some(error),
        }
    }
}
