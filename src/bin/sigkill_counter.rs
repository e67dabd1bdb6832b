/*
 * sigkill_counter.rs - A handy program for testing a process supervisor
 *
 * usage: sigkill_counter
 * Prints a heartbeat line with its pid and a tick count every second and
 * acknowledges each SIGUSR1. Runs until killed.
 */

use supervisor_fixtures::waiter::{HeartbeatStyle, SignalWaiter};
use supervisor_fixtures::{logging, utils};

fn main() {
    logging::init();

    match SignalWaiter::new(HeartbeatStyle::Counted).run() {
        Ok(never) => match never {},
        Err(err) => utils::fail(&err),
    }
}
