use std::process;

use clap::Parser;
use scopescript::{logger, Config, Driver};
use termion::color::{Fg, Red};
use termion::style;

fn main() {
    let config = Config::parse();

    if let Err(err) = logger::init(config.log_level()) {
        eprintln!("unable to install logger: {}", err);
    }

    let mut driver = Driver::new(config);

    if let Err(err) = driver.run() {
        if termion::is_tty(&std::io::stderr()) {
            eprintln!("{}{}error{}: {}", style::Bold, Fg(Red), style::Reset, err.render());
        } else {
            eprintln!("error: {}", err.render());
        }

        process::exit(1);
    }
}
