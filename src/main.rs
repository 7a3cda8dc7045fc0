use std::process::ExitCode;

use plum_rules::driver::config::DriverConfig;
use plum_rules::driver::terminal::run_stdio_loop;

fn main() -> ExitCode {
    let config = match DriverConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("info string config error: {err}");
            return ExitCode::from(2);
        }
    };

    match run_stdio_loop(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("info string fatal {err}");
            ExitCode::FAILURE
        }
    }
}
