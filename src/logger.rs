use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use termion::color::{self, Fg};
use termion::style;

/// Installs a stderr logger, colored when stderr is a terminal.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    if termion::is_tty(&std::io::stderr()) {
        log::set_boxed_logger(Box::new(ColorLogger))?;
    } else {
        log::set_boxed_logger(Box::new(PlainLogger))?;
    }

    log::set_max_level(level);

    Ok(())
}

/// Simple logger that dumps everything to stderr.
struct PlainLogger;

impl Log for PlainLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("{}: {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// Simple logger that colorizes the level and writes to stderr.
struct ColorLogger;

impl Log for ColorLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        match record.level() {
            Level::Error => paint("error", color::Red, record),
            Level::Warn => paint("warn", color::Yellow, record),
            Level::Info => paint("info", color::Green, record),
            Level::Debug => paint("debug", color::Cyan, record),
            Level::Trace => paint("trace", color::White, record),
        }
    }

    fn flush(&self) {}
}

fn paint<C: color::Color>(name: &str, color: C, record: &Record) {
    eprintln!(
        "{}{}{}{}: {}",
        style::Bold,
        Fg(color),
        name,
        style::Reset,
        record.args()
    );
}
