use std::io::Read;

use clap::{ArgAction, ArgGroup, Parser};
use log::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
#[clap(group(ArgGroup::new("input").required(true).args(&["file", "inline", "stdin"])))]
pub struct Config {
    /// Optionally read program as an arg
    #[clap(short, long, conflicts_with_all = &["file", "stdin"])]
    pub inline: Option<String>,

    /// Optionally read program from stdin
    #[clap(short, long, conflicts_with_all = &["file", "inline"])]
    pub stdin: bool,

    /// Log more, repeat for even more (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Script file to be run
    pub file: Option<String>,
}

impl Config {
    /// Where the script comes from, as shown in log and error output.
    pub fn source_name(&self) -> String {
        if let Some(path) = &self.file {
            path.clone()
        } else if self.stdin {
            String::from("<stdin>")
        } else {
            String::from("<inline>")
        }
    }

    pub fn get_script(&self) -> std::io::Result<String> {
        if let Some(script) = &self.inline {
            return Ok(script.clone());
        }

        if self.stdin {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;

            return Ok(input);
        }

        match &self.file {
            Some(path) => std::fs::read_to_string(path),
            None => Ok(String::new()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl TryFrom<Vec<&str>> for Config {
    type Error = String;
    fn try_from(args: Vec<&str>) -> Result<Self, Self::Error> {
        match Config::try_parse_from(args) {
            Ok(config) => Ok(config),
            Err(e) => Err(e.to_string()),
        }
    }
}
