use std::process::ExitCode;

fn main() -> ExitCode {
    match gnv_cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            gnv_logger::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
