use std::error::Error;
use std::io;
use std::process::ExitCode;

use processor::format_reports;
use processor::Processor;

mod config;
mod input;
mod logger;

use config::Config;

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    logger::init(config.log_level);
    log::debug!("{:?}", config);

    let workload = input::read_workload(io::stdin().lock(), &mut io::stdout())?;
    let simulation = Processor::new(config.processor).run(&workload);

    println!();
    print!("{}", format_reports(&simulation));
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
