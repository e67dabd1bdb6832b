/*
 * random_exit.rs - A handy program for testing a process supervisor
 *
 * usage: random_exit
 * Prints its pid and a pseudo-random status (0 or 1), then exits with it.
 */

use std::process;
use supervisor_fixtures::{fixtures, logging, utils};

fn main() {
    logging::init();

    match fixtures::random_exit() {
        Ok(status) => process::exit(i32::from(status)),
        Err(err) => utils::fail(&err),
    }
}
