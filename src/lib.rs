pub mod driver;
pub mod interpreter;
pub mod logger;
pub mod memory;

pub use driver::{Config, Driver, DriverError};
pub use interpreter::{run_source, Interpreter, ScriptError, ScriptErrorKind};
pub use memory::ScopedMemory;
