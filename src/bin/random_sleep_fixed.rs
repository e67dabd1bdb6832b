/*
 * random_sleep_fixed.rs - A handy program for testing a process supervisor
 *
 * usage: random_sleep_fixed
 * Like random_sleep with a bound of 4: sleeps 0 to 3 seconds, exits with 0.
 */

use std::process;
use supervisor_fixtures::cli::FIXED_SLEEP_BOUND;
use supervisor_fixtures::{fixtures, logging, utils};

fn main() {
    logging::init();

    if let Err(err) = fixtures::random_sleep(FIXED_SLEEP_BOUND) {
        utils::fail(&err);
    }

    process::exit(0);
}
