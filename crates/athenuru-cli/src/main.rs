use std::process::ExitCode;

use athenuru_cli::{command, logging, run, GlobalArgs};

fn main() -> ExitCode {
    let matches = command().get_matches();
    logging::init(GlobalArgs::from_matches(&matches).log_json);

    let stdout = std::io::stdout();
    match run(&matches, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
