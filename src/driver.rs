mod config;
mod error;

use crate::interpreter::Interpreter;

pub use config::Config;
pub use error::DriverError;

pub struct Driver {
    config: Config,
    saved_output: Option<String>,
}

impl Driver {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            saved_output: None,
        }
    }

    /// Keep printed lines in memory rather than writing them to stdout.
    pub fn save_output(&mut self) {
        if self.saved_output.is_none() {
            self.saved_output = Some(String::new());
        }
    }

    pub fn take_saved_output(&mut self) -> Option<String> {
        self.saved_output.take()
    }

    pub fn run(&mut self) -> Result<(), DriverError> {
        let source = self.config.source_name();
        let script = self
            .config
            .get_script()
            .map_err(|error| DriverError::ReadFailed {
                source: source.clone(),
                error,
            })?;

        log::info!("loaded {} ({} bytes)", source, script.len());

        let result = {
            let mut interpreter = Interpreter::new(&script);

            if self.saved_output.is_some() {
                interpreter.save_output();
            }

            let result = interpreter.run();

            if let (Some(saved), Some(output)) =
                (&mut self.saved_output, interpreter.take_saved_output())
            {
                saved.push_str(&output);
            }

            result
        };

        result.map_err(|error| DriverError::Script {
            source,
            script,
            error,
        })
    }
}
