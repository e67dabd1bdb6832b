//! The one-shot fixtures. Each writes its banner, draws once from a
//! time-seeded stream and reports what it drew before acting on it.

use crate::output;
use crate::rng::TimeSeededRng;
use crate::trace::{Fixture, TraceLine};
use crate::Result;
use nix::unistd::getpid;
use std::num::NonZeroU64;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Reports a status of 0 or 1 and returns it; the caller exits with it.
pub fn random_exit() -> Result<u8> {
    output::emit(&TraceLine::Banner(Fixture::RandomExit))?;
    let mut rng = TimeSeededRng::from_wall_clock()?;
    let status = rng.exit_status();
    output::emit(&TraceLine::ExitReport {
        pid: getpid(),
        status,
    })?;
    Ok(status)
}

/// Reports a duration in `[0, bound)` seconds, sleeps for it and returns it.
pub fn random_sleep(bound: NonZeroU64) -> Result<u64> {
    output::emit(&TraceLine::Banner(Fixture::RandomSleep))?;
    let mut rng = TimeSeededRng::from_wall_clock()?;
    let seconds = rng.below(bound);
    output::emit(&TraceLine::SleepReport {
        pid: getpid(),
        seconds,
    })?;

    if seconds > 0 {
        debug!(seconds, bound = bound.get(), "sleeping");
        thread::sleep(Duration::from_secs(seconds));
    }
    Ok(seconds)
}
