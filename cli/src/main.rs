use log::error;
use overtoast_core::platform::Platform;
use overtoast_core::{NotificationRequest, OvertoastResult};
use std::process::ExitCode;

mod cli;
mod logger;

fn main() -> ExitCode {
    if let Err(e) = logger::init_logger(logger::DEFAULT_LEVEL) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let request = NotificationRequest::resolve(&cli::parse_args().into_raw());

    match show(&request) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn show(request: &NotificationRequest) -> OvertoastResult<()> {
    let mut platform = Platform::new()?;
    overtoast_core::run(&mut platform, request)?;
    Ok(())
}
