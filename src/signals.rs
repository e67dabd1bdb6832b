use crate::error::FixtureError;
use crate::trace::ACK_LINE;
use crate::Result;
use nix::libc::STDOUT_FILENO;
use nix::unistd::write;
use once_cell::sync::OnceCell;
use signal_hook::consts::signal::SIGUSR1;
use signal_hook::{low_level, SigId};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static ACKS: AtomicU64 = AtomicU64::new(0);
static REGISTRATION: OnceCell<SigId> = OnceCell::new();

/// Installs the SIGUSR1 acknowledgement action for the rest of the process.
///
/// The action writes the acknowledgement line with a single raw `write(2)`
/// on stdout, bypassing the buffered `Stdout` the heartbeat loop holds.
/// Calling this again returns the existing registration.
pub fn install_ack_handler() -> Result<SigId> {
    REGISTRATION
        .get_or_try_init(|| {
            // SAFETY: `acknowledge` only calls write(2) and an atomic add,
            // both async-signal-safe.
            let id = unsafe { low_level::register(SIGUSR1, acknowledge) }
                .map_err(FixtureError::SignalInstall)?;
            debug!("SIGUSR1 handler installed");
            Ok(id)
        })
        .copied()
}

/// Number of SIGUSR1 deliveries acknowledged so far.
pub fn acks_received() -> u64 {
    ACKS.load(Ordering::Relaxed)
}

fn acknowledge() {
    // Nothing sensible can be done about a failed write here.
    let _ = write(STDOUT_FILENO, ACK_LINE);
    ACKS.fetch_add(1, Ordering::Relaxed);
}
