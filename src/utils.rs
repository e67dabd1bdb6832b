use crate::error::FixtureError;
use std::process;

/// Reports a fatal error on stderr, unless it is a lost stdout, and exits
/// with its status.
pub fn fail(err: &FixtureError) -> ! {
    if let Some(diagnostic) = err.diagnostic() {
        eprintln!("{}", diagnostic);
    }
    process::exit(err.exit_code());
}
