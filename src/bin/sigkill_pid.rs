/*
 * sigkill_pid.rs - A handy program for testing a process supervisor
 *
 * usage: sigkill_pid
 * Prints a heartbeat line with its pid every second and acknowledges each
 * SIGUSR1. Runs until killed.
 */

use supervisor_fixtures::waiter::{HeartbeatStyle, SignalWaiter};
use supervisor_fixtures::{logging, utils};

fn main() {
    logging::init();

    match SignalWaiter::new(HeartbeatStyle::Identified).run() {
        Ok(never) => match never {},
        Err(err) => utils::fail(&err),
    }
}
