use std::process::ExitCode;

use wall_layout::{CliArgs, CliDriver};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = CliArgs::from_args(&args).and_then(|parsed| CliDriver::new(parsed).run_stdout());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("genbricks: {err}");
            ExitCode::FAILURE
        }
    }
}
