mod cli;

use std::process::ExitCode;

use cli::CliError;

fn main() -> ExitCode {
    match cli::parse_args(std::env::args().skip(1)).and_then(|command| cli::run(&command)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(CliError::Usage) => {
            eprintln!("{}", cli::USAGE);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
