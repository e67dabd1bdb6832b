use crate::output;
use crate::signals;
use crate::trace::{Fixture, HeartbeatTag, TraceLine};
use crate::Result;
use nix::unistd::{getpid, Pid};
use std::convert::Infallible;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};

pub const HEARTBEAT_PERIOD: Duration = Duration::from_secs(1);

/// How much a heartbeat line says about the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartbeatStyle {
    /// `Waiting for SIGUSR1 signal...`
    Plain,
    /// `Waiting for SIGUSR1 signal... <pid>`
    Identified,
    /// `Waiting for SIGUSR1 signal... <pid> <count>s`
    Counted,
}

/// Counts heartbeat ticks from zero, one per tick, never skipping.
#[derive(Debug, Default)]
pub struct HeartbeatCounter {
    next: u64,
}

impl HeartbeatCounter {
    pub fn new() -> Self {
        HeartbeatCounter::default()
    }

    /// Returns the value for this tick and advances the counter.
    pub fn tick(&mut self) -> u64 {
        let current = self.next;
        self.next += 1;
        current
    }
}

/// Prints a banner, acknowledges every SIGUSR1 and heartbeats about once a
/// second until something kills the process.
pub struct SignalWaiter {
    style: HeartbeatStyle,
    pid: Pid,
    counter: HeartbeatCounter,
}

impl SignalWaiter {
    pub fn new(style: HeartbeatStyle) -> Self {
        SignalWaiter {
            style,
            pid: getpid(),
            counter: HeartbeatCounter::new(),
        }
    }

    /// Builds the next heartbeat line, advancing the counter for the counted style.
    pub fn next_heartbeat(&mut self) -> TraceLine {
        let tag = match self.style {
            HeartbeatStyle::Plain => HeartbeatTag::None,
            HeartbeatStyle::Identified => HeartbeatTag::Pid(self.pid),
            HeartbeatStyle::Counted => HeartbeatTag::PidAndCount(self.pid, self.counter.tick()),
        };
        TraceLine::Heartbeat(tag)
    }

    /// Runs until the process is killed. Only returns on a host failure.
    pub fn run(mut self) -> Result<Infallible> {
        output::emit(&TraceLine::Banner(Fixture::SigKill))?;
        signals::install_ack_handler()?;
        debug!(pid = %self.pid, style = ?self.style, "heartbeating");

        let mut acks_seen = 0;
        loop {
            output::emit(&self.next_heartbeat())?;
            // A signal may cut this short; the next tick simply comes early.
            thread::sleep(HEARTBEAT_PERIOD);
            io::stdout().flush()?;

            let acks = signals::acks_received();
            if acks != acks_seen {
                debug!(acks, "SIGUSR1 acknowledged");
                acks_seen = acks;
            }
            trace!("tick");
        }
    }
}
