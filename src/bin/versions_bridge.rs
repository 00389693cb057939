use std::process::ExitCode;

fn main() -> ExitCode {
    appversion::app::startup::bridge_startup()
}
