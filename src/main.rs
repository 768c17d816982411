use std::process::ExitCode;

fn main() -> ExitCode {
    match web_search_client::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
