use std::io;
use std::time::SystemTimeError;
use thiserror::Error;

/// Exit status for failures of the host environment. Kept apart from
/// `random_exit`'s {0, 1} so a supervisor never mistakes one for the other.
pub const EXIT_HOST_FATAL: i32 = 71;

pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("wall clock is set before the unix epoch: {0}")]
    Clock(#[from] SystemTimeError),

    #[error("unable to install SIGUSR1 handler: {0}")]
    SignalInstall(#[source] io::Error),

    #[error("unable to write to standard output: {0}")]
    Output(#[from] io::Error),
}

impl FixtureError {
    /// Process exit status used when this error ends a fixture.
    pub fn exit_code(&self) -> i32 {
        EXIT_HOST_FATAL
    }

    /// Line to print on stderr before exiting, if any. Losing stdout ends
    /// the fixture silently: the reader has gone away.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            FixtureError::Output(_) => None,
            FixtureError::Clock(_) | FixtureError::SignalInstall(_) => {
                Some(format!("Error: {}", self))
            }
        }
    }
}
