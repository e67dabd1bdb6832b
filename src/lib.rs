//! Fixture programs that a process supervisor spawns, watches and signals.
//!
//! Every fixture writes a short line-oriented trace to standard output and
//! nothing to standard error. The binaries under `src/bin/` are thin wrappers
//! around [`fixtures`] and [`waiter::SignalWaiter`].

pub mod cli;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod output;
pub mod rng;
pub mod signals;
pub mod trace;
pub mod utils;
pub mod waiter;

pub use error::{FixtureError, Result};
