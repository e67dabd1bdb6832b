/*
 * sigkill.rs - A handy program for testing a process supervisor
 *
 * usage: sigkill
 * Prints a heartbeat line every second and acknowledges each SIGUSR1.
 * Runs until killed.
 */

use supervisor_fixtures::waiter::{HeartbeatStyle, SignalWaiter};
use supervisor_fixtures::{logging, utils};

fn main() {
    logging::init();

    match SignalWaiter::new(HeartbeatStyle::Plain).run() {
        Ok(never) => match never {},
        Err(err) => utils::fail(&err),
    }
}
