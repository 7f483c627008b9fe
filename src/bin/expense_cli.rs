use std::process::ExitCode;

fn main() -> ExitCode {
    match expense_core::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
