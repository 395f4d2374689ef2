mod context;
mod flags;
mod parse;
mod prompts;
mod quiet;
mod text;

use std::process::ExitCode;

pub use context::{Context, Failure};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Parse `args`, generate, and report the outcome as an exit code.
pub fn run(args: Vec<String>) -> ExitCode {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());
    match result {
        Ok(()) | Err(Failure::Aborted) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("cli failure: {:?}", e);
            prompts::error(&e.to_string());
            e.exit_code()
        }
    }
}
